//! Image export for the WASM API
//!
//! The host passes its rasterizer (an `html2canvas`-style function) to
//! `exportImage`. It is called as `rasterize(canvasElement, plan)` and must
//! return, or resolve to, a PNG data URL. The resulting image is downloaded as
//! `menu-<preset>.png`.

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

use super::helpers::{serialize, with_editor};
use super::layout::schedule_refit;
use crate::dom::{alert_user, cancel_pending_refit, trigger_download, DomSurface};
use crate::error::{MenuError, Result as MenuResult};
use crate::export::{run_export, ExportPlan, RasterImage};
use crate::html_layout::refit;

/// Rasterize the canvas at the selected preset's size and download it.
///
/// Resolves to `{ fileName, dataUrl }`. On failure the user is alerted once
/// and the promise rejects; the preview transform is restored either way.
#[wasm_bindgen(js_name = exportImage)]
pub async fn export_image(rasterize: Function) -> Result<JsValue, JsValue> {
    cancel_pending_refit();
    let (plan, error_message, mut surface) = with_editor(|state| {
        let mut surface = DomSurface::locate(&state.config.surface)
            .ok_or_else(|| MenuError::Raster("menu canvas is not mounted".to_string()))?;

        // The pending refit was cancelled above; run it now so the plan is current.
        refit(state, &mut surface);
        let plan = ExportPlan::new(state.preset(), state.fit())
            .ok_or_else(|| MenuError::Raster("content has not been measured".to_string()))?;

        state.begin_export()?;
        Ok((plan, state.config.export_error_message.clone(), surface))
    })?;

    log::info!(
        "exportImage: {} at {}x{}",
        plan.preset_id,
        plan.output_width,
        plan.output_height
    );

    let canvas = surface.canvas().clone();
    let outcome = run_export(&mut surface, &plan, |plan| call_rasterizer(&rasterize, canvas, plan)).await;

    with_editor(|state| {
        state.end_export();
        Ok(())
    })?;
    schedule_refit()?;

    match outcome.and_then(|image| download(&image).map(|_| image)) {
        Ok(image) => {
            log::info!("exportImage: {} ({} bytes)", image.file_name, image.data_url.len());
            serialize(&image, "RasterImage serialization error")
        }
        Err(e) => {
            log::error!("exportImage failed: {}", e);
            alert_user(&error_message);
            Err(e.into())
        }
    }
}

#[wasm_bindgen(js_name = isExporting)]
pub fn is_exporting() -> Result<bool, JsValue> {
    with_editor(|state| Ok(state.is_exporting()))
}

async fn call_rasterizer(rasterize: &Function, canvas: HtmlElement, plan: ExportPlan) -> MenuResult<String> {
    let plan = serialize(&plan, "ExportPlan serialization error").map_err(raster_error)?;
    let returned = rasterize.call2(&JsValue::NULL, &canvas, &plan).map_err(raster_error)?;

    // Plain values and promises are both accepted.
    let value = JsFuture::from(Promise::resolve(&returned))
        .await
        .map_err(raster_error)?;

    value
        .as_string()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| MenuError::Raster("rasterizer did not return a data URL".to_string()))
}

fn download(image: &RasterImage) -> MenuResult<()> {
    trigger_download(image).map_err(raster_error)
}

fn raster_error(value: JsValue) -> MenuError {
    let message = value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value));
    MenuError::Raster(message)
}
