//! Menu Editor WASM Module
//!
//! WASM-owned state and layout fitting for a browser-hosted restaurant menu
//! editor. The host renders the display list; this module measures the
//! rendered DOM, fits it onto the selected export canvas and orchestrates the
//! image export.

pub mod api;
pub mod config;
pub mod dom;
pub mod error;
pub mod export;
pub mod html_layout;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use config::EditorConfig;
pub use error::{MenuError, Result};
pub use html_layout::{compute_fit, FitMode, FitResult, VerticalAlign};
pub use models::{EditorState, ExportPreset, MenuDocument, MenuItem, Section, SpacingParameters};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() -> std::result::Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug)
        .map_err(|e| JsValue::from_str(&format!("failed to initialize logger: {}", e)))?;

    log::info!("Menu Editor WASM module initialized");
    Ok(())
}
