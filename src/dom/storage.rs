use gloo::storage::{LocalStorage, Storage};

use crate::error::{MenuError, Result};
use crate::storage::KeyValueStore;

/// `window.localStorage` as a [`KeyValueStore`]
pub struct BrowserStore {
    _private: (),
}

impl BrowserStore {
    /// `None` when storage is disabled (private mode, sandboxed iframe)
    pub fn open() -> Option<Self> {
        match web_sys::window()?.local_storage() {
            Ok(Some(_)) => Some(Self { _private: () }),
            Ok(None) => None,
            Err(e) => {
                log::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| MenuError::Storage(format!("{:?}", e)))
    }

    fn remove(&mut self, key: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            log::warn!("Failed to remove '{}': {:?}", key, e);
        }
    }
}
