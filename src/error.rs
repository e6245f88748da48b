//! Error type shared by the document model, persistence and export layers

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("section index {index} out of bounds (sections: {len})")]
    SectionOutOfBounds { index: usize, len: usize },

    #[error("item index {index} out of bounds in section {section} (items: {len})")]
    ItemOutOfBounds {
        section: usize,
        index: usize,
        len: usize,
    },

    #[error("unknown export preset: {0}")]
    UnknownPreset(String),

    #[error("saved menu not found: {0}")]
    SnapshotNotFound(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rasterization failed: {0}")]
    Raster(String),

    #[error("an export is already in progress")]
    ExportInProgress,

    #[error("editor not initialized")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, MenuError>;

impl From<MenuError> for JsValue {
    fn from(err: MenuError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
