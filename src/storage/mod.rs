//! Best-effort persistence of saved menus and design settings
//!
//! Both records are JSON strings in a key-value store. Loading never fails:
//! a missing or unparsable record is logged and replaced by its default.
//! Writing reports errors to the caller, who decides whether they matter.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::StorageKeys;
use crate::error::Result;
use crate::models::{SavedMenus, SpacingParameters};

/// String key-value store (browser `localStorage` or an in-memory map)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str);
}

/// In-memory store used by tests and as a fallback when no browser storage exists
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Typed access to the two persisted records
pub struct MenuRepository<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> MenuRepository<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn load_saved_menus(&self) -> SavedMenus {
        load_or_default(&self.store, &self.keys.saved_menus, Value::is_array)
    }

    pub fn store_saved_menus(&mut self, menus: &SavedMenus) -> Result<()> {
        store_json(&mut self.store, &self.keys.saved_menus, menus)
    }

    pub fn load_design_settings(&self) -> SpacingParameters {
        load_or_default::<SpacingParameters, _>(&self.store, &self.keys.design_settings, Value::is_object)
            .normalized()
    }

    pub fn store_design_settings(&mut self, spacing: &SpacingParameters) -> Result<()> {
        store_json(&mut self.store, &self.keys.design_settings, spacing)
    }
}

/// Parse the record under `key`, accepting only the JSON shape `expected`
/// admits. serde reads a struct from a sequence too, so the shape is checked
/// before conversion.
fn load_or_default<T, S>(store: &S, key: &str, expected: fn(&Value) -> bool) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    let parsed = serde_json::from_str::<Value>(&raw).and_then(|value| {
        if expected(&value) {
            serde_json::from_value(value).map(Some)
        } else {
            Ok(None)
        }
    });
    match parsed {
        Ok(Some(value)) => value,
        Ok(None) => {
            log::warn!("Stored '{}' has an unexpected shape. Using defaults.", key);
            T::default()
        }
        Err(e) => {
            log::warn!("Failed to parse stored '{}': {}. Using defaults.", key, e);
            T::default()
        }
    }
}

fn store_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}
