//! Refit pipeline: measure → decide → apply
//!
//! Runs against a `&mut EditorState`, so the caller holds the state for the
//! whole pass and the fit is always applied to the state it was measured
//! against.

use super::fit::{compute_fit, FitResult};
use super::surface::{preview_transform_css, LayoutSurface, PreviewSurface};
use crate::models::EditorState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RefitOutcome {
    /// A fit was computed and applied to the surface
    Applied(FitResult),
    /// Content not mounted; the previous fit is left in place
    Unmounted,
    /// An export owns the surface; try again once it finishes
    Deferred,
}

/// Bring the surface in line with the current state.
///
/// Measures only when the cached height is missing or stale. A surface that
/// cannot be measured leaves both the state and the DOM untouched.
pub fn refit<S>(state: &mut EditorState, surface: &mut S) -> RefitOutcome
where
    S: LayoutSurface + PreviewSurface + ?Sized,
{
    if state.is_exporting() {
        log::debug!("refit deferred: export in progress");
        return RefitOutcome::Deferred;
    }

    let natural_height = match state.cached_height() {
        Some(height) => height,
        None => {
            surface.prepare_canvas(state.preset());
            match surface.measure_natural_height() {
                Some(height) if height.is_finite() && height > 0.0 => {
                    state.record_measurement(height);
                    height
                }
                other => {
                    log::debug!("refit skipped: content not measurable ({:?})", other);
                    return RefitOutcome::Unmounted;
                }
            }
        }
    };

    let preset = state.preset();
    let fit = compute_fit(natural_height, preset, &state.fit_mode(), &state.config.fit);
    surface.apply_fit(&fit, preset);
    state.set_fit(fit);
    surface.set_preview_transform(&preview_transform_css(state.preview_scale()));

    log::debug!(
        "refit rev {}: natural {:.1}px, scale {:.3}, canvas {:.1}px",
        state.revision(),
        fit.measured_content_height,
        fit.applied_content_scale,
        fit.effective_canvas_height
    );

    RefitOutcome::Applied(fit)
}
