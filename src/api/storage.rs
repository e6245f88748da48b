//! Saved menus and design settings API
//!
//! Saved menus live only in `localStorage`; every call re-reads the stored
//! collection so that several open tabs see each other's saves.

use wasm_bindgen::prelude::*;

use super::helpers::{serialize, to_js_error, with_editor};
use super::layout::schedule_refit;
use super::types::EditResult;
use crate::config::StorageKeys;
use crate::dom::BrowserStore;
use crate::error::{MenuError, Result as MenuResult};
use crate::models::{SavedMenuSnapshot, SavedMenus, SpacingParameters};
use crate::storage::MenuRepository;

fn open_repository(keys: &StorageKeys) -> MenuResult<MenuRepository<BrowserStore>> {
    BrowserStore::open()
        .map(|store| MenuRepository::new(store, keys.clone()))
        .ok_or_else(|| MenuError::Storage("localStorage unavailable".to_string()))
}

fn storage_keys() -> Result<StorageKeys, JsValue> {
    with_editor(|state| Ok(state.config.storage_keys.clone()))
}

/// Best-effort write of the design settings; failures are only logged.
pub(crate) fn persist_design_settings(keys: &StorageKeys, spacing: &SpacingParameters) {
    let outcome = open_repository(keys).and_then(|mut repo| repo.store_design_settings(spacing));
    if let Err(e) = outcome {
        log::warn!("Design settings not saved: {}", e);
    }
}

fn upsert_saved_menu(keys: &StorageKeys, snapshot: SavedMenuSnapshot) -> MenuResult<SavedMenus> {
    let mut repo = open_repository(keys)?;
    let mut menus = repo.load_saved_menus();
    menus.upsert(snapshot);
    repo.store_saved_menus(&menus)?;
    Ok(menus)
}

fn remove_saved_menu(keys: &StorageKeys, id: &str) -> MenuResult<SavedMenus> {
    let mut repo = open_repository(keys)?;
    let mut menus = repo.load_saved_menus();
    let removed = menus.remove(id)?;
    log::info!("deleteSavedMenu: '{}'", removed.name);
    repo.store_saved_menus(&menus)?;
    Ok(menus)
}

/// Save the current menu under `name` and return the updated collection.
///
/// A save with the name of an existing entry replaces it.
#[wasm_bindgen(js_name = saveMenu)]
pub fn save_menu(name: &str) -> Result<JsValue, JsValue> {
    let (snapshot, keys) = with_editor(|state| {
        Ok((state.capture_snapshot(name), state.config.storage_keys.clone()))
    })?;
    log::info!("saveMenu: '{}' ({} sections)", snapshot.name, snapshot.sections.len());

    let menus = upsert_saved_menu(&keys, snapshot).map_err(to_js_error)?;

    serialize(&menus, "SavedMenus serialization error")
}

#[wasm_bindgen(js_name = listSavedMenus)]
pub fn list_saved_menus() -> Result<JsValue, JsValue> {
    let keys = storage_keys()?;
    let menus = match open_repository(&keys) {
        Ok(repo) => repo.load_saved_menus(),
        Err(e) => {
            log::warn!("{}", e);
            SavedMenus::new()
        }
    };
    serialize(&menus, "SavedMenus serialization error")
}

/// Replace the live document and spacing with a saved menu.
#[wasm_bindgen(js_name = loadSavedMenu)]
pub fn load_saved_menu(id: &str) -> Result<JsValue, JsValue> {
    let keys = storage_keys()?;
    let menus = open_repository(&keys).map_err(to_js_error)?.load_saved_menus();
    let snapshot = menus.get(id).map_err(to_js_error)?;
    log::info!("loadSavedMenu: '{}' saved at {}", snapshot.name, snapshot.saved_at);

    let (result, spacing) = with_editor(|state| {
        state.restore_snapshot(snapshot)?;
        Ok((EditResult::from_state(state), *state.spacing()))
    })?;

    persist_design_settings(&keys, &spacing);
    schedule_refit()?;
    serialize(&result, "EditResult serialization error")
}

/// Delete a saved menu and return the remaining collection.
#[wasm_bindgen(js_name = deleteSavedMenu)]
pub fn delete_saved_menu(id: &str) -> Result<JsValue, JsValue> {
    let keys = storage_keys()?;
    let menus = remove_saved_menu(&keys, id).map_err(to_js_error)?;

    serialize(&menus, "SavedMenus serialization error")
}
