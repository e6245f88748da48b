//! Design settings: cosmetic scale factors applied to the menu layout
//!
//! Every factor multiplies a base pixel size defined by the layout engine.
//! The record is persisted on its own, independent of any saved menu.

use serde::{Deserialize, Serialize};

const MIN_FACTOR: f64 = 0.1;
const MAX_FACTOR: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingParameters {
    #[serde(default = "default_factor")]
    pub content_padding: f64,

    #[serde(default = "default_factor")]
    pub section_gap: f64,

    #[serde(default = "default_factor")]
    pub item_gap: f64,

    #[serde(default = "default_factor")]
    pub font_scale: f64,

    #[serde(default = "default_factor")]
    pub subtitle_scale: f64,

    #[serde(default = "default_factor")]
    pub logo_scale: f64,

    #[serde(default = "default_background_opacity")]
    pub background_opacity: f64,
}

fn default_factor() -> f64 {
    1.0
}

fn default_background_opacity() -> f64 {
    0.35
}

impl Default for SpacingParameters {
    fn default() -> Self {
        Self {
            content_padding: default_factor(),
            section_gap: default_factor(),
            item_gap: default_factor(),
            font_scale: default_factor(),
            subtitle_scale: default_factor(),
            logo_scale: default_factor(),
            background_opacity: default_background_opacity(),
        }
    }
}

impl SpacingParameters {
    /// Copy with non-finite values replaced by defaults and everything
    /// clamped to a usable range.
    pub fn normalized(&self) -> Self {
        Self {
            content_padding: clamp_factor(self.content_padding),
            section_gap: clamp_factor(self.section_gap),
            item_gap: clamp_factor(self.item_gap),
            font_scale: clamp_factor(self.font_scale),
            subtitle_scale: clamp_factor(self.subtitle_scale),
            logo_scale: clamp_factor(self.logo_scale),
            background_opacity: if self.background_opacity.is_finite() {
                self.background_opacity.clamp(0.0, 1.0)
            } else {
                default_background_opacity()
            },
        }
    }
}

fn clamp_factor(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_FACTOR, MAX_FACTOR)
    } else {
        default_factor()
    }
}
