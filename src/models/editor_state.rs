//! Editor state management
//!
//! This module contains the EditorState struct which represents the complete
//! state of the menu editor: the document, the design settings, the selected
//! preset and fit mode, and the derived layout (measurement cache and last
//! applied fit).
//!
//! This is the WASM-owned source of truth for all editor state. It has a single
//! writer; every mutation goes through a method here so the measurement cache
//! can be invalidated in one place.

use crate::config::{EditorConfig, DEFAULT_PRESET_ID};
use crate::error::{MenuError, Result};
use crate::html_layout::fit::{preview_scale, FitMode, FitResult};
use crate::html_layout::{LayoutEngine, MenuDisplayList};
use crate::models::{
    default_preset, find_preset, ExportPreset, MenuDocument, SavedMenuSnapshot, SpacingParameters,
};

/// Natural content height, valid only for the revision it was taken at
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    pub natural_height: f64,
    pub revision: u64,
}

#[derive(Clone, Debug)]
pub struct EditorState {
    pub config: EditorConfig,
    document: MenuDocument,
    spacing: SpacingParameters,
    preset: &'static ExportPreset,
    fit_mode: FitMode,

    /// Bumped by every change that can alter the rendered content height
    revision: u64,
    measurement: Option<Measurement>,
    fit: Option<FitResult>,

    /// Editor viewport available for the preview (0 = unknown)
    viewport: (f64, f64),
    exporting: bool,
}

impl EditorState {
    /// Create a new editor state with the sample document
    pub fn new(config: EditorConfig, spacing: SpacingParameters) -> Self {
        let preset = find_preset(&config.default_preset).unwrap_or_else(|_| {
            log::warn!(
                "Unknown default preset '{}', using '{}'",
                config.default_preset,
                DEFAULT_PRESET_ID
            );
            default_preset()
        });

        Self {
            config,
            document: MenuDocument::sample(),
            spacing: spacing.normalized(),
            preset,
            fit_mode: FitMode::default(),
            revision: 0,
            measurement: None,
            fit: None,
            viewport: (0.0, 0.0),
            exporting: false,
        }
    }

    pub fn document(&self) -> &MenuDocument {
        &self.document
    }

    pub fn spacing(&self) -> &SpacingParameters {
        &self.spacing
    }

    pub fn preset(&self) -> &'static ExportPreset {
        self.preset
    }

    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn fit(&self) -> Option<&FitResult> {
        self.fit.as_ref()
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Run a document edit. On success the measurement cache is invalidated.
    pub fn edit_document<T>(&mut self, edit: impl FnOnce(&mut MenuDocument) -> Result<T>) -> Result<T> {
        self.ensure_idle()?;
        let value = edit(&mut self.document)?;
        self.invalidate();
        Ok(value)
    }

    pub fn set_spacing(&mut self, spacing: SpacingParameters) -> Result<()> {
        self.ensure_idle()?;
        self.spacing = spacing.normalized();
        self.invalidate();
        Ok(())
    }

    pub fn select_preset(&mut self, id: &str) -> Result<&'static ExportPreset> {
        self.ensure_idle()?;
        let preset = find_preset(id)?;
        if preset.id != self.preset.id {
            self.preset = preset;
            // Canvas width changes line wrapping, so the height is stale too.
            self.invalidate();
        }
        Ok(preset)
    }

    /// Fit mode only affects the decision step; the cached height stays valid.
    pub fn set_fit_mode(&mut self, mode: FitMode) -> Result<()> {
        self.ensure_idle()?;
        self.fit_mode = mode;
        Ok(())
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = (width.max(0.0), height.max(0.0));
    }

    pub fn capture_snapshot(&self, name: &str) -> SavedMenuSnapshot {
        SavedMenuSnapshot::capture(name, &self.document, &self.spacing)
    }

    pub fn restore_snapshot(&mut self, snapshot: &SavedMenuSnapshot) -> Result<()> {
        self.ensure_idle()?;
        snapshot.restore_into(&mut self.document, &mut self.spacing);
        self.spacing = self.spacing.normalized();
        self.invalidate();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Derived layout
    // ------------------------------------------------------------------

    /// Cached natural height, if it was taken at the current revision
    pub fn cached_height(&self) -> Option<f64> {
        self.measurement
            .filter(|m| m.revision == self.revision)
            .map(|m| m.natural_height)
    }

    pub fn record_measurement(&mut self, natural_height: f64) {
        self.measurement = Some(Measurement {
            natural_height,
            revision: self.revision,
        });
    }

    pub fn set_fit(&mut self, fit: FitResult) {
        self.fit = Some(fit);
    }

    /// Drop the cached measurement; the next refit measures again
    pub fn invalidate(&mut self) {
        self.revision += 1;
        self.measurement = None;
    }

    /// Canvas height shown in the preview: the last fit, else the preset height
    pub fn canvas_height(&self) -> Option<f64> {
        self.fit
            .map(|f| f.effective_canvas_height)
            .or_else(|| self.preset.height_px())
    }

    /// Viewport-fitting factor for the preview wrapper
    pub fn preview_scale(&self) -> f64 {
        let (vw, vh) = self.viewport;
        preview_scale(vw, vh, self.preset.width_px(), self.canvas_height().unwrap_or(0.0))
    }

    pub fn display_list(&self) -> MenuDisplayList {
        LayoutEngine::new(&self.config.branding, &self.config.currency).compute_layout(
            &self.document,
            &self.spacing,
            self.preset,
        )
    }

    // ------------------------------------------------------------------
    // Export guard
    // ------------------------------------------------------------------

    pub fn begin_export(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.exporting = true;
        Ok(())
    }

    pub fn end_export(&mut self) {
        self.exporting = false;
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.exporting {
            return Err(MenuError::ExportInProgress);
        }
        Ok(())
    }
}
