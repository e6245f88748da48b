//! Rendering surface seams
//!
//! The layout code never touches the DOM directly. It measures and styles the
//! rendered menu through these traits; the browser implementation lives in
//! `crate::dom`, tests use in-memory fakes.

use super::fit::FitResult;
use crate::models::ExportPreset;

/// The rendered menu content inside its canvas
pub trait LayoutSurface {
    /// Give the canvas the preset's width so the content reflows before it
    /// is measured.
    fn prepare_canvas(&mut self, preset: &ExportPreset);

    /// Natural height of the content subtree in CSS pixels.
    ///
    /// Implementations reset the content's own scale transform to identity
    /// for the duration of the measurement and put it back afterwards.
    /// Returns `None` while the content is not mounted or has no layout.
    fn measure_natural_height(&mut self) -> Option<f64>;

    /// Size the canvas and place/scale the content box per `fit`.
    fn apply_fit(&mut self, fit: &FitResult, preset: &ExportPreset);
}

/// The outer wrapper that carries the preview-only viewport scale
pub trait PreviewSurface {
    /// Current CSS transform of the preview wrapper (empty when unset)
    fn preview_transform(&self) -> String;

    fn set_preview_transform(&mut self, transform: &str);
}

/// CSS transform for a preview scale factor
pub fn preview_transform_css(scale: f64) -> String {
    if scale >= 1.0 {
        "none".to_string()
    } else {
        format!("scale({})", scale)
    }
}
