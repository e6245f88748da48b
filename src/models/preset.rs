//! Export preset catalog
//!
//! A preset fixes the CSS width of the canvas, optionally its height, and the
//! device-pixel ratio used when rasterizing. A preset without a height lets
//! the content decide the canvas height.

use serde::Serialize;

use crate::config::DEFAULT_PRESET_ID;
use crate::error::{MenuError, Result};

#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportPreset {
    pub id: &'static str,
    pub display_name: &'static str,
    pub width: u32,
    /// `None` = natural height
    pub height: Option<u32>,
    pub raster_scale: f64,
}

impl ExportPreset {
    pub fn is_natural_height(&self) -> bool {
        self.height.is_none()
    }

    pub fn width_px(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_px(&self) -> Option<f64> {
        self.height.map(f64::from)
    }
}

pub const PRESETS: [ExportPreset; 4] = [
    ExportPreset {
        id: "original",
        display_name: "Original (natural height)",
        width: 1200,
        height: None,
        raster_scale: 2.0,
    },
    ExportPreset {
        id: "social",
        display_name: "Social post 1080×1080",
        width: 1080,
        height: Some(1080),
        raster_scale: 1.0,
    },
    ExportPreset {
        id: "story",
        display_name: "Story 1080×1920",
        width: 1080,
        height: Some(1920),
        raster_scale: 1.0,
    },
    ExportPreset {
        id: "print",
        display_name: "Print A4 (150 dpi)",
        width: 1240,
        height: Some(1754),
        raster_scale: 2.0,
    },
];

pub fn presets() -> &'static [ExportPreset] {
    &PRESETS
}

/// Preset used when a configured or stored id is unknown
pub fn default_preset() -> &'static ExportPreset {
    PRESETS
        .iter()
        .find(|p| p.id == DEFAULT_PRESET_ID)
        .unwrap_or(&PRESETS[0])
}

pub fn find_preset(id: &str) -> Result<&'static ExportPreset> {
    PRESETS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| MenuError::UnknownPreset(id.to_string()))
}
