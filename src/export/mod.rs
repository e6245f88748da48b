//! Image export orchestration
//!
//! Export rasterizes the canvas at the preset's pixel size. The preview
//! wrapper normally carries a viewport-fitting scale; it is removed for the
//! duration of the rasterization by a [`PreviewFreeze`] guard, which puts the
//! previous transform back when dropped. Dropping happens on success, on
//! error and on early return alike.

use std::future::Future;

use serde::Serialize;

use crate::error::{MenuError, Result};
use crate::html_layout::{FitResult, PreviewSurface};
use crate::models::ExportPreset;

/// Everything the rasterizer needs, captured before the async boundary
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportPlan {
    pub preset_id: String,
    pub file_name: String,
    /// CSS size of the canvas
    pub width: f64,
    pub height: f64,
    /// Device-pixel ratio handed to the rasterizer
    pub raster_scale: f64,
    /// Final image size in pixels
    pub output_width: u32,
    pub output_height: u32,
}

impl ExportPlan {
    /// `None` when the preset has natural height and no fit was computed yet
    pub fn new(preset: &ExportPreset, fit: Option<&FitResult>) -> Option<Self> {
        let height = fit
            .map(|f| f.effective_canvas_height)
            .or_else(|| preset.height_px())?;
        let width = preset.width_px();

        Some(Self {
            preset_id: preset.id.to_string(),
            file_name: export_file_name(preset.id),
            width,
            height,
            raster_scale: preset.raster_scale,
            output_width: (width * preset.raster_scale).round() as u32,
            output_height: (height * preset.raster_scale).round() as u32,
        })
    }
}

/// Deterministic download name for a preset
pub fn export_file_name(preset_id: &str) -> String {
    let slug: String = preset_id
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("menu-{}.png", slug)
}

/// Encoded result of a successful export
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RasterImage {
    pub file_name: String,
    /// `data:image/png;base64,...`
    pub data_url: String,
}

/// Removes the preview transform until dropped
pub struct PreviewFreeze<'a, S: PreviewSurface + ?Sized> {
    surface: &'a mut S,
    saved: String,
}

impl<'a, S: PreviewSurface + ?Sized> PreviewFreeze<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        let saved = surface.preview_transform();
        surface.set_preview_transform("none");
        Self { surface, saved }
    }

    /// Transform that will be restored
    pub fn saved_transform(&self) -> &str {
        &self.saved
    }
}

impl<S: PreviewSurface + ?Sized> Drop for PreviewFreeze<'_, S> {
    fn drop(&mut self) {
        self.surface.set_preview_transform(&self.saved);
    }
}

/// Freeze the preview, rasterize, restore.
///
/// `rasterize` resolves to a PNG data URL. Any failure, including an empty
/// or non-PNG result, is returned as [`MenuError::Raster`] after the preview
/// transform has been restored.
pub async fn run_export<S, F, Fut>(surface: &mut S, plan: &ExportPlan, rasterize: F) -> Result<RasterImage>
where
    S: PreviewSurface + ?Sized,
    F: FnOnce(ExportPlan) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let freeze = PreviewFreeze::new(surface);
    log::debug!(
        "export {}: preview transform '{}' frozen, rasterizing {}x{}",
        plan.preset_id,
        freeze.saved_transform(),
        plan.output_width,
        plan.output_height
    );

    let outcome = rasterize(plan.clone()).await;
    drop(freeze);

    let data_url = outcome?;
    if !data_url.starts_with("data:image/png") {
        return Err(MenuError::Raster(format!(
            "rasterizer returned unexpected output ({} bytes)",
            data_url.len()
        )));
    }

    Ok(RasterImage {
        file_name: plan.file_name.clone(),
        data_url,
    })
}
