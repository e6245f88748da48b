use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use crate::export::RasterImage;

/// Hand the image to the browser as a file download
pub fn trigger_download(image: &RasterImage) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_download(&image.file_name);
    anchor.set_href(&image.data_url);
    anchor.click();
    Ok(())
}

pub fn alert_user(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", e);
        }
    }
}

/// Milliseconds from `performance.now()`, if the host has one
pub fn now_ms() -> Option<f64> {
    Some(web_sys::window()?.performance()?.now())
}
