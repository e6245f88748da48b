//! Fit engine
//!
//! Pure computation that reconciles the measured natural height of the menu
//! content with the canvas geometry of an export preset. The result says how
//! tall the canvas is, how much the content is scaled and where the content
//! box sits inside the canvas.
//!
//! The scale factor differs from 1 only for fixed-height presets without
//! trimming, so natural-height and trimmed exports rasterize the unscaled DOM.

use serde::{Deserialize, Serialize};

use crate::config::FitConstants;
use crate::models::ExportPreset;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
}

impl VerticalAlign {
    /// CSS `transform-origin` for the content box
    pub fn transform_origin(self) -> &'static str {
        match self {
            VerticalAlign::Top => "top center",
            VerticalAlign::Center => "center center",
        }
    }
}

/// User-selected fitting behaviour. `trim_to_content` wins over `auto_fit`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FitMode {
    pub auto_fit: bool,
    pub trim_to_content: bool,
    pub vertical_align: VerticalAlign,
}

impl Default for FitMode {
    fn default() -> Self {
        Self {
            auto_fit: true,
            trim_to_content: false,
            vertical_align: VerticalAlign::Top,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FitResult {
    pub measured_content_height: f64,
    pub applied_content_scale: f64,
    pub effective_canvas_height: f64,
    /// Distance from the canvas top to the (unscaled) content box
    pub content_offset_top: f64,
    pub anchor: VerticalAlign,
}

impl FitResult {
    pub fn scaled_content_height(&self) -> f64 {
        self.measured_content_height * self.applied_content_scale
    }

    /// CSS transform applied to the content box
    pub fn content_transform(&self) -> String {
        if self.applied_content_scale == 1.0 {
            "none".to_string()
        } else {
            format!("scale({})", self.applied_content_scale)
        }
    }

    /// True when the scaled content still does not fit in the canvas
    pub fn overflows(&self, constants: &FitConstants) -> bool {
        self.scaled_content_height() + constants.fixed_margin_px > self.effective_canvas_height + 0.5
    }
}

/// Compute the fit for content of `natural_height` px on `preset`.
///
/// Centre alignment only applies while the scaled content plus margin fits
/// the canvas; otherwise the result is anchored at the top.
///
/// `natural_height` must have been measured with the content's own scale
/// transform reset to identity.
pub fn compute_fit(
    natural_height: f64,
    preset: &ExportPreset,
    mode: &FitMode,
    constants: &FitConstants,
) -> FitResult {
    let margin = constants.fixed_margin_px;

    let Some(target_height) = preset.height_px() else {
        return FitResult {
            measured_content_height: natural_height,
            applied_content_scale: 1.0,
            effective_canvas_height: natural_height,
            content_offset_top: 0.0,
            anchor: VerticalAlign::Top,
        };
    };

    if mode.trim_to_content {
        return FitResult {
            measured_content_height: natural_height,
            applied_content_scale: 1.0,
            effective_canvas_height: target_height.min(natural_height + margin),
            content_offset_top: margin / 2.0,
            anchor: VerticalAlign::Top,
        };
    }

    let available = target_height - margin;
    let scale = if !mode.auto_fit || natural_height <= available {
        1.0
    } else {
        constants.min_auto_fit_scale.max(available / natural_height)
    };

    // Centring needs slack; content that still overflows starts at the top
    // margin and spills past the bottom.
    let has_slack = natural_height * scale + margin <= target_height;
    let anchor = match mode.vertical_align {
        VerticalAlign::Center if has_slack => VerticalAlign::Center,
        _ => VerticalAlign::Top,
    };
    let content_offset_top = match anchor {
        VerticalAlign::Top => margin / 2.0,
        // Box is centred unscaled; scaling about its centre keeps it centred.
        VerticalAlign::Center => (target_height - natural_height) / 2.0,
    };

    FitResult {
        measured_content_height: natural_height,
        applied_content_scale: scale,
        effective_canvas_height: target_height,
        content_offset_top,
        anchor,
    }
}

/// Largest factor (at most 1) that fits a canvas into the editor viewport.
///
/// A non-positive viewport dimension is ignored.
pub fn preview_scale(viewport_width: f64, viewport_height: f64, canvas_width: f64, canvas_height: f64) -> f64 {
    let mut scale: f64 = 1.0;
    if viewport_width > 0.0 && canvas_width > 0.0 {
        scale = scale.min(viewport_width / canvas_width);
    }
    if viewport_height > 0.0 && canvas_height > 0.0 {
        scale = scale.min(viewport_height / canvas_height);
    }
    scale
}
