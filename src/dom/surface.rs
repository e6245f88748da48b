//! DOM implementation of the layout and preview surfaces
//!
//! Three nested elements are involved: the preview wrapper (viewport scale),
//! the canvas (the rasterized frame) and the content subtree (measured and
//! fit-scaled). Elements are looked up by id on every use, so nothing keeps a
//! handle to a node the host has since replaced.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::SurfaceIds;
use crate::html_layout::{FitResult, LayoutSurface, PreviewSurface};
use crate::models::ExportPreset;

pub struct DomSurface {
    wrapper: HtmlElement,
    canvas: HtmlElement,
    content: HtmlElement,
}

impl DomSurface {
    /// `None` until the host has mounted all three elements
    pub fn locate(ids: &SurfaceIds) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self {
            wrapper: element_by_id(&document, &ids.preview_wrapper)?,
            canvas: element_by_id(&document, &ids.canvas)?,
            content: element_by_id(&document, &ids.content)?,
        })
    }

    /// The element handed to the rasterizer
    pub fn canvas(&self) -> &HtmlElement {
        &self.canvas
    }
}

fn element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("Failed to set {}: {} ({:?})", property, value, e);
    }
}

fn style_value(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap_or_default()
}

/// Restore an inline style captured with `style_value`; empty means unset.
fn restore_style(element: &HtmlElement, property: &str, previous: &str) {
    if previous.is_empty() {
        if let Err(e) = element.style().remove_property(property) {
            log::warn!("Failed to remove {} ({:?})", property, e);
        }
    } else {
        set_style(element, property, previous);
    }
}

fn px(value: f64) -> String {
    format!("{}px", value)
}

impl LayoutSurface for DomSurface {
    fn prepare_canvas(&mut self, preset: &ExportPreset) {
        set_style(&self.canvas, "width", &px(preset.width_px()));
    }

    fn measure_natural_height(&mut self) -> Option<f64> {
        // Detached or display:none content has no offset parent.
        self.content.offset_parent()?;

        let previous = style_value(&self.content, "transform");
        set_style(&self.content, "transform", "none");
        let height = f64::from(self.content.scroll_height().max(self.content.offset_height()));
        restore_style(&self.content, "transform", &previous);

        (height > 0.0).then_some(height)
    }

    fn apply_fit(&mut self, fit: &FitResult, preset: &ExportPreset) {
        set_style(&self.canvas, "position", "relative");
        set_style(&self.canvas, "overflow", "hidden");
        set_style(&self.canvas, "width", &px(preset.width_px()));
        set_style(&self.canvas, "height", &px(fit.effective_canvas_height));

        set_style(&self.content, "position", "absolute");
        set_style(&self.content, "left", "0");
        set_style(&self.content, "right", "0");
        set_style(&self.content, "top", &px(fit.content_offset_top));
        set_style(&self.content, "transform-origin", fit.anchor.transform_origin());
        set_style(&self.content, "transform", &fit.content_transform());
    }
}

impl PreviewSurface for DomSurface {
    fn preview_transform(&self) -> String {
        style_value(&self.wrapper, "transform")
    }

    fn set_preview_transform(&mut self, transform: &str) {
        set_style(&self.wrapper, "transform-origin", "top center");
        restore_style(&self.wrapper, "transform", transform);
    }
}
