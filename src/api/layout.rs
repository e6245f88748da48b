//! Layout API
//!
//! Spacing, presets, fit mode, preview viewport and the refit pipeline. The
//! refit runs against the DOM surface under a single lock acquisition.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, is_initialized, serialize, with_editor};
use super::storage::persist_design_settings;
use super::types::{EditResult, FitReport};
use crate::dom::{debounce_refit, now_ms, DomSurface};
use crate::html_layout::{refit, FitMode, RefitOutcome};
use crate::models::{presets, SpacingParameters};

// ============================================================================
// Spacing
// ============================================================================

#[wasm_bindgen(js_name = getSpacing)]
pub fn get_spacing() -> Result<JsValue, JsValue> {
    let spacing = with_editor(|state| Ok(*state.spacing()))?;
    serialize(&spacing, "Spacing serialization error")
}

/// Replace the design settings; out-of-range values are clamped.
#[wasm_bindgen(js_name = setSpacing)]
pub fn set_spacing(spacing: JsValue) -> Result<JsValue, JsValue> {
    let spacing: SpacingParameters = deserialize(spacing, "Invalid spacing parameters")?;
    apply_spacing(spacing)
}

#[wasm_bindgen(js_name = resetSpacing)]
pub fn reset_spacing() -> Result<JsValue, JsValue> {
    apply_spacing(SpacingParameters::default())
}

fn apply_spacing(spacing: SpacingParameters) -> Result<JsValue, JsValue> {
    let (result, stored, keys) = with_editor(|state| {
        state.set_spacing(spacing)?;
        Ok((
            EditResult::from_state(state),
            *state.spacing(),
            state.config.storage_keys.clone(),
        ))
    })?;

    persist_design_settings(&keys, &stored);
    schedule_refit()?;
    serialize(&result, "EditResult serialization error")
}

// ============================================================================
// Presets and fit mode
// ============================================================================

#[wasm_bindgen(js_name = listPresets)]
pub fn list_presets() -> Result<JsValue, JsValue> {
    serialize(presets(), "Preset serialization error")
}

#[wasm_bindgen(js_name = selectPreset)]
pub fn select_preset(id: &str) -> Result<JsValue, JsValue> {
    log::info!("selectPreset: {}", id);
    let result = with_editor(|state| {
        state.select_preset(id)?;
        Ok(EditResult::from_state(state))
    })?;

    schedule_refit()?;
    serialize(&result, "EditResult serialization error")
}

/// Partial fit modes are accepted; missing fields take their defaults.
#[wasm_bindgen(js_name = setFitMode)]
pub fn set_fit_mode(mode: JsValue) -> Result<JsValue, JsValue> {
    let mode: FitMode = deserialize(mode, "Invalid fit mode")?;
    log::info!("setFitMode: {:?}", mode);
    with_editor(|state| state.set_fit_mode(mode))?;
    refit_now()
}

/// Size of the editor area available to the preview
#[wasm_bindgen(js_name = setPreviewViewport)]
pub fn set_preview_viewport(width: f64, height: f64) -> Result<JsValue, JsValue> {
    with_editor(|state| {
        state.set_viewport(width, height);
        Ok(())
    })?;
    refit_now()
}

// ============================================================================
// Refit
// ============================================================================

/// Measure, decide and apply immediately.
#[wasm_bindgen(js_name = refitNow)]
pub fn refit_now() -> Result<JsValue, JsValue> {
    let started = now_ms();
    let mut report = with_editor(|state| {
        let outcome = match DomSurface::locate(&state.config.surface) {
            Some(mut surface) => refit(state, &mut surface),
            None => RefitOutcome::Unmounted,
        };
        Ok(FitReport::new(state, Some(outcome)))
    })?;

    report.elapsed_ms = started.zip(now_ms()).map(|(start, end)| end - start);
    if let Some(elapsed) = report.elapsed_ms {
        log::debug!("refitNow: {} in {:.2}ms", report.status, elapsed);
    }
    serialize(&report, "FitReport serialization error")
}

/// Queue a refit after the configured debounce delay, replacing any pending one.
#[wasm_bindgen(js_name = scheduleRefit)]
pub fn schedule_refit() -> Result<(), JsValue> {
    let delay = with_editor(|state| Ok(state.config.refit_debounce_ms))?;
    debounce_refit(delay, || {
        if !is_initialized() {
            return;
        }
        if let Err(e) = refit_now() {
            log::warn!("scheduled refit failed: {:?}", e);
        }
    });
    Ok(())
}

/// Last applied fit, without measuring
#[wasm_bindgen(js_name = getFitResult)]
pub fn get_fit_result() -> Result<JsValue, JsValue> {
    let report = with_editor(|state| Ok(FitReport::new(state, None)))?;
    serialize(&report, "FitReport serialization error")
}
