//! Display List for the menu preview
//!
//! This module defines the output structure returned from the layout engine to JavaScript.
//! The host renders DOM elements straight from it: every string is final and every
//! size is already in CSS pixels.

use serde::Serialize;

/// Top-level display list for one render of the menu
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuDisplayList {
    pub header: MenuHeader,

    /// Sections that have at least one named item
    pub sections: Vec<RenderSection>,

    pub footer_lines: Vec<String>,

    /// Optional full-bleed background layer
    pub background: Option<BackgroundLayer>,

    pub style: StyleMetrics,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuHeader {
    pub title: String,
    pub subtitle: String,
    /// Date stamp, present only when enabled
    pub date: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderSection {
    /// Index into the editable section list (for click-to-edit)
    pub section_index: usize,
    pub title: String,
    pub items: Vec<RenderItem>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderItem {
    /// Index into the section's editable item list
    pub item_index: usize,
    pub name: String,
    /// Formatted price column, absent when the item has no prices
    pub price_label: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundLayer {
    pub data_url: String,
    pub opacity: f64,
}

/// Pixel sizes derived from the spacing parameters
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleMetrics {
    /// CSS width of the canvas (from the selected preset)
    pub canvas_width: f64,
    pub content_padding_y: f64,
    pub content_padding_x: f64,
    pub section_gap: f64,
    pub item_gap: f64,
    pub title_font_size: f64,
    pub subtitle_font_size: f64,
    pub section_title_font_size: f64,
    pub item_font_size: f64,
    pub footer_font_size: f64,
}
