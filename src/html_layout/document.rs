//! Document-level layout computation
//!
//! Takes the menu document, the spacing parameters and the branding/currency
//! configuration and produces the DisplayList the host renders. Base sizes are
//! the CSS pixel values of the reference menu design at factor 1.0.

use super::display_list::*;
use crate::config::{CurrencyLabels, MenuBranding};
use crate::models::{ExportPreset, MenuDocument, MenuItem, SpacingParameters};

const BASE_PADDING_Y: f64 = 64.0;
const BASE_PADDING_X: f64 = 80.0;
const BASE_SECTION_GAP: f64 = 40.0;
const BASE_ITEM_GAP: f64 = 12.8;
const BASE_TITLE_FONT: f64 = 80.0;
const BASE_SUBTITLE_FONT: f64 = 32.0;
const BASE_SECTION_TITLE_FONT: f64 = 40.0;
const BASE_ITEM_FONT: f64 = 32.0;
const BASE_FOOTER_FONT: f64 = 32.0;

/// Main layout engine for computing display lists
pub struct LayoutEngine<'a> {
    branding: &'a MenuBranding,
    currency: &'a CurrencyLabels,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(branding: &'a MenuBranding, currency: &'a CurrencyLabels) -> Self {
        Self { branding, currency }
    }

    /// Compute the display list for a document on the given preset
    pub fn compute_layout(
        &self,
        document: &MenuDocument,
        spacing: &SpacingParameters,
        preset: &ExportPreset,
    ) -> MenuDisplayList {
        let spacing = spacing.normalized();

        let sections = document
            .rendered_sections()
            .into_iter()
            .map(|section| RenderSection {
                section_index: section.section_index,
                title: section.title.to_string(),
                items: section
                    .items
                    .into_iter()
                    .map(|(item_index, item)| RenderItem {
                        item_index,
                        name: item.name.clone(),
                        price_label: self.format_price(item),
                    })
                    .collect(),
            })
            .collect();

        MenuDisplayList {
            header: MenuHeader {
                title: self.branding.title.clone(),
                subtitle: self.branding.subtitle.clone(),
                date: document.date_stamp().map(str::to_string),
            },
            sections,
            footer_lines: self.branding.footer_lines.clone(),
            background: document.background_image.as_ref().map(|image| BackgroundLayer {
                data_url: image.data_url.clone(),
                opacity: spacing.background_opacity,
            }),
            style: Self::style_metrics(&spacing, preset),
        }
    }

    /// "3.91 лв / 2€", "3.91 лв", "2€" or nothing
    pub fn format_price(&self, item: &MenuItem) -> Option<String> {
        let primary = item
            .primary_price
            .as_deref()
            .map(|p| format!("{}{}", p.trim(), self.currency.primary_suffix));
        let secondary = item
            .secondary_price
            .as_deref()
            .map(|p| format!("{}{}", p.trim(), self.currency.secondary_suffix));

        match (primary, secondary) {
            (Some(p), Some(s)) => Some(format!("{}{}{}", p, self.currency.separator, s)),
            (Some(p), None) => Some(p),
            (None, Some(s)) => Some(s),
            (None, None) => None,
        }
    }

    fn style_metrics(spacing: &SpacingParameters, preset: &ExportPreset) -> StyleMetrics {
        StyleMetrics {
            canvas_width: preset.width_px(),
            content_padding_y: BASE_PADDING_Y * spacing.content_padding,
            content_padding_x: BASE_PADDING_X * spacing.content_padding,
            section_gap: BASE_SECTION_GAP * spacing.section_gap,
            item_gap: BASE_ITEM_GAP * spacing.item_gap,
            title_font_size: BASE_TITLE_FONT * spacing.logo_scale,
            subtitle_font_size: BASE_SUBTITLE_FONT * spacing.subtitle_scale,
            section_title_font_size: BASE_SECTION_TITLE_FONT * spacing.font_scale,
            item_font_size: BASE_ITEM_FONT * spacing.font_scale,
            footer_font_size: BASE_FOOTER_FONT * spacing.font_scale,
        }
    }
}
