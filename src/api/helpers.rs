//! Shared helpers for WASM API operations
//!
//! This module contains the WASM-owned editor state and the common patterns
//! for serialization, deserialization and error handling used across all API
//! operations.

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{MenuError, Result as MenuResult};
use crate::models::EditorState;

// WASM-owned editor state (canonical source of truth)
lazy_static! {
    static ref EDITOR: Mutex<Option<EditorState>> = Mutex::new(None);
}

fn lock_editor() -> MutexGuard<'static, Option<EditorState>> {
    // A panic mid-edit leaves the state consistent enough to keep editing.
    EDITOR.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Replace the editor state (used by `initEditor`)
pub fn install_editor(state: EditorState) {
    *lock_editor() = Some(state);
}

pub fn is_initialized() -> bool {
    lock_editor().is_some()
}

/// Run `f` against the editor state, converting errors for JavaScript.
///
/// The lock is released before this returns; never call back into another
/// API function from inside `f`.
pub fn with_editor<T>(f: impl FnOnce(&mut EditorState) -> MenuResult<T>) -> Result<T, JsValue> {
    let mut guard = lock_editor();
    let state = guard.as_mut().ok_or_else(|| to_js_error(MenuError::NotInitialized))?;
    f(state).map_err(to_js_error)
}

pub fn to_js_error(err: MenuError) -> JsValue {
    log::error!("{}", err);
    err.into()
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Like [`deserialize`], but `undefined`/`null` yields the default
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize + ?Sized>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| {
            let msg = format!("{}: {}", error_context, e);
            log::error!("{}", msg);
            JsValue::from_str(&msg)
        })
}
