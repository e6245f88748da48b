//! Document API
//!
//! Editor initialization and every mutation of the menu document. Each
//! mutation returns an [`EditResult`] with the fresh display list and queues a
//! debounced refit, since the rendered height has changed.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_or_default, install_editor, serialize, with_editor};
use super::layout::schedule_refit;
use super::types::EditResult;
use crate::config::EditorConfig;
use crate::dom::BrowserStore;
use crate::error::Result as MenuResult;
use crate::models::{BackgroundImage, EditorState, MenuDocument, MenuItem, Section};
use crate::storage::MenuRepository;

/// Create the editor state.
///
/// `config` is an optional, partial `EditorConfig`; missing fields take their
/// defaults. Design settings are restored from `localStorage` when present.
#[wasm_bindgen(js_name = initEditor)]
pub fn init_editor(config: JsValue) -> Result<JsValue, JsValue> {
    let config: EditorConfig = deserialize_or_default(config, "Invalid editor config")?;

    let spacing = match BrowserStore::open() {
        Some(store) => MenuRepository::new(store, config.storage_keys.clone()).load_design_settings(),
        None => Default::default(),
    };

    let state = EditorState::new(config, spacing);
    log::info!(
        "initEditor: preset '{}', {} sections",
        state.preset().id,
        state.document().sections.len()
    );
    let result = EditResult::from_state(&state);
    install_editor(state);

    schedule_refit()?;
    serialize(&result, "EditResult serialization error")
}

/// Run a document edit and report the result.
fn edit<T>(
    context: &str,
    op: impl FnOnce(&mut MenuDocument) -> MenuResult<T>,
    created: impl FnOnce(&T) -> Option<usize>,
) -> Result<JsValue, JsValue> {
    log::debug!("{}", context);
    let result = with_editor(|state| {
        let value = state.edit_document(op)?;
        let mut result = EditResult::from_state(state);
        if let Some(index) = created(&value) {
            result = result.with_created(index);
        }
        Ok(result)
    })?;

    schedule_refit()?;
    serialize(&result, "EditResult serialization error")
}

fn none<T>(_: &T) -> Option<usize> {
    None
}

#[wasm_bindgen(js_name = getDocument)]
pub fn get_document() -> Result<JsValue, JsValue> {
    let document = with_editor(|state| Ok(state.document().clone()))?;
    serialize(&document, "Document serialization error")
}

#[wasm_bindgen(js_name = getDisplayList)]
pub fn get_display_list() -> Result<JsValue, JsValue> {
    let display_list = with_editor(|state| Ok(state.display_list()))?;
    serialize(&display_list, "DisplayList serialization error")
}

// ============================================================================
// Sections
// ============================================================================

#[wasm_bindgen(js_name = addSection)]
pub fn add_section(title: &str) -> Result<JsValue, JsValue> {
    edit("addSection", |doc| Ok(doc.add_section(title)), |index| Some(*index))
}

/// Insert a full section (title and items) at `index`
#[wasm_bindgen(js_name = insertSection)]
pub fn insert_section(index: usize, section: JsValue) -> Result<JsValue, JsValue> {
    let section: Section = deserialize(section, "Invalid section")?;
    edit(
        "insertSection",
        |doc| doc.insert_section(index, section),
        |_| Some(index),
    )
}

#[wasm_bindgen(js_name = removeSection)]
pub fn remove_section(index: usize) -> Result<JsValue, JsValue> {
    edit("removeSection", |doc| doc.remove_section(index), none)
}

#[wasm_bindgen(js_name = moveSection)]
pub fn move_section(from: usize, to: usize) -> Result<JsValue, JsValue> {
    edit("moveSection", |doc| doc.move_section(from, to), none)
}

#[wasm_bindgen(js_name = setSectionTitle)]
pub fn set_section_title(index: usize, title: &str) -> Result<JsValue, JsValue> {
    edit("setSectionTitle", |doc| doc.set_section_title(index, title), none)
}

// ============================================================================
// Items
// ============================================================================

#[wasm_bindgen(js_name = addItem)]
pub fn add_item(section: usize) -> Result<JsValue, JsValue> {
    edit("addItem", |doc| doc.add_item(section), |index| Some(*index))
}

#[wasm_bindgen(js_name = insertItem)]
pub fn insert_item(section: usize, index: usize, item: JsValue) -> Result<JsValue, JsValue> {
    let item: MenuItem = deserialize(item, "Invalid menu item")?;
    edit(
        "insertItem",
        |doc| doc.insert_item(section, index, item),
        |_| Some(index),
    )
}

#[wasm_bindgen(js_name = removeItem)]
pub fn remove_item(section: usize, index: usize) -> Result<JsValue, JsValue> {
    edit("removeItem", |doc| doc.remove_item(section, index), none)
}

#[wasm_bindgen(js_name = moveItem)]
pub fn move_item(section: usize, from: usize, to: usize) -> Result<JsValue, JsValue> {
    edit("moveItem", |doc| doc.move_item(section, from, to), none)
}

#[wasm_bindgen(js_name = setItemName)]
pub fn set_item_name(section: usize, index: usize, name: &str) -> Result<JsValue, JsValue> {
    edit("setItemName", |doc| doc.set_item_name(section, index, name), none)
}

/// Empty strings clear the corresponding price
#[wasm_bindgen(js_name = setItemPrices)]
pub fn set_item_prices(
    section: usize,
    index: usize,
    primary: &str,
    secondary: &str,
) -> Result<JsValue, JsValue> {
    edit(
        "setItemPrices",
        |doc| doc.set_item_prices(section, index, primary, secondary),
        none,
    )
}

// ============================================================================
// Display options
// ============================================================================

#[wasm_bindgen(js_name = setShowDate)]
pub fn set_show_date(show: bool) -> Result<JsValue, JsValue> {
    edit(
        "setShowDate",
        |doc| {
            doc.set_show_date(show);
            Ok(())
        },
        none,
    )
}

#[wasm_bindgen(js_name = setMenuDate)]
pub fn set_menu_date(date: &str) -> Result<JsValue, JsValue> {
    edit(
        "setMenuDate",
        |doc| {
            doc.set_menu_date(date);
            Ok(())
        },
        none,
    )
}

/// Set the background from raw file bytes; the MIME type is sniffed and
/// `mime_type` is only the fallback.
#[wasm_bindgen(js_name = setBackgroundImage)]
pub fn set_background_image(bytes: &[u8], mime_type: &str) -> Result<JsValue, JsValue> {
    let image = BackgroundImage::from_bytes(bytes, mime_type);
    log::info!(
        "setBackgroundImage: {} bytes as {}",
        bytes.len(),
        image.mime_type().unwrap_or("unknown")
    );
    edit(
        "setBackgroundImage",
        |doc| {
            doc.set_background_image(image);
            Ok(())
        },
        none,
    )
}

#[wasm_bindgen(js_name = clearBackgroundImage)]
pub fn clear_background_image() -> Result<JsValue, JsValue> {
    edit(
        "clearBackgroundImage",
        |doc| {
            doc.clear_background_image();
            Ok(())
        },
        none,
    )
}
