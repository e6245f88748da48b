//! WASM build test
//!
//! Runs in a browser (`wasm-pack test --headless --chrome`) against a real DOM:
//! the exported API, the DOM surface and the freeze guard.

#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Reflect};
use menu_editor_wasm::api;
use menu_editor_wasm::config::SurfaceIds;
use menu_editor_wasm::dom::DomSurface;
use menu_editor_wasm::export::PreviewFreeze;
use menu_editor_wasm::html_layout::{LayoutSurface, PreviewSurface};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

/// Mount wrapper > canvas > content with a block of known height
fn mount(content_height: u32) {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(old) = document.get_element_by_id("menu-preview-wrapper") {
        old.remove();
    }
    let ids = SurfaceIds::default();
    let wrapper = document.create_element("div").unwrap();
    wrapper.set_id(&ids.preview_wrapper);
    let canvas = document.create_element("div").unwrap();
    canvas.set_id(&ids.canvas);
    let content = document.create_element("div").unwrap();
    content.set_id(&ids.content);
    content
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .set_property("height", &format!("{}px", content_height))
        .unwrap();

    canvas.append_child(&content).unwrap();
    wrapper.append_child(&canvas).unwrap();
    document.body().unwrap().append_child(&wrapper).unwrap();
}

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn test_init_returns_display_list() {
    let result = api::init_editor(JsValue::UNDEFINED).unwrap();
    let display_list = field(&result, "displayList");
    let sections = field(&display_list, "sections");
    assert_eq!(js_sys::Array::from(&sections).length(), 3);
}

#[wasm_bindgen_test]
fn test_dom_surface_measures_with_identity_transform() {
    mount(1500);
    let mut surface = DomSurface::locate(&SurfaceIds::default()).unwrap();

    assert_eq!(surface.measure_natural_height(), Some(1500.0));

    let preset = menu_editor_wasm::models::find_preset("social").unwrap();
    let fit = menu_editor_wasm::compute_fit(1500.0, preset, &Default::default(), &Default::default());
    surface.apply_fit(&fit, preset);
    // Scaled content still measures at its natural height
    assert_eq!(surface.measure_natural_height(), Some(1500.0));
}

#[wasm_bindgen_test]
fn test_canvas_takes_preset_width_before_measuring() {
    mount(400);
    let mut surface = DomSurface::locate(&SurfaceIds::default()).unwrap();
    let print = menu_editor_wasm::models::find_preset("print").unwrap();

    surface.prepare_canvas(print);
    assert_eq!(surface.canvas().style().get_property_value("width").unwrap(), "1240px");
}

#[wasm_bindgen_test]
fn test_unmounted_surface_is_not_located() {
    let ids = SurfaceIds {
        canvas: "no-such-canvas".to_string(),
        ..Default::default()
    };
    assert!(DomSurface::locate(&ids).is_none());
}

#[wasm_bindgen_test]
fn test_freeze_restores_wrapper_transform() {
    mount(400);
    let mut surface = DomSurface::locate(&SurfaceIds::default()).unwrap();
    surface.set_preview_transform("scale(0.55)");
    {
        let _freeze = PreviewFreeze::new(&mut surface);
    }
    assert_eq!(surface.preview_transform(), "scale(0.55)");
}

#[wasm_bindgen_test]
fn test_refit_applies_preset_canvas() {
    mount(1500);
    api::init_editor(JsValue::UNDEFINED).unwrap();
    let report = api::refit_now().unwrap();

    assert_eq!(field(&report, "status").as_string().as_deref(), Some("applied"));
    let fit = field(&report, "fit");
    assert_eq!(field(&fit, "effectiveCanvasHeight").as_f64(), Some(1080.0));
}

#[wasm_bindgen_test]
async fn test_export_failure_restores_preview() {
    mount(600);
    api::init_editor(JsValue::UNDEFINED).unwrap();
    api::set_preview_viewport(540.0, 2000.0).unwrap();

    let wrapper = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id("menu-preview-wrapper")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    let before = wrapper.style().get_property_value("transform").unwrap();

    // Suppress the alert for the headless run
    let window = web_sys::window().unwrap();
    Reflect::set(&window, &JsValue::from_str("alert"), &Function::new_no_args("")).unwrap();

    let rasterize = Function::new_with_args("canvas, plan", "return Promise.reject(new Error('boom'));");
    assert!(api::export_image(rasterize).await.is_err());

    assert_eq!(wrapper.style().get_property_value("transform").unwrap(), before);
    assert!(!api::is_exporting().unwrap());
}
