//! Persistent Todo Storage
//!
//! Saves and restores the whole item list as one JSON snapshot under a
//! fixed key. Every save overwrites the previous snapshot.

#[cfg(test)]
use std::collections::HashMap;
use std::sync::Arc;
#[cfg(test)]
use std::sync::Mutex;

use crate::models::Item;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("browser storage error: {0}")]
    Browser(String),
    #[error("snapshot encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<wasm_bindgen::JsValue> for StoreError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        StoreError::Browser(format!("{:?}", value))
    }
}

/// Minimal string key-value backend
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Backend handle shared with the reactive context
pub type SharedBackend = Box<dyn KeyValueStore + Send + Sync>;

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

/// Browser `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()?
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.storage()?.get_item(key)?)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(self.storage()?.set_item(key, value)?)
    }
}

/// In-memory backend
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Item list snapshot bound to one storage key
#[derive(Debug, Clone)]
pub struct TodoStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> TodoStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn save(&self, items: &[Item]) -> Result<(), StoreError> {
        let json = serde_json::to_string(items)?;
        self.backend.set_item(&self.key, &json)?;
        log::debug!("saved {} items under {}", items.len(), self.key);
        Ok(())
    }

    /// Restore the snapshot. Missing, unreadable or corrupt data loads as empty.
    pub fn load(&self) -> Vec<Item> {
        match self.try_load() {
            Ok(items) => items,
            Err(e) => {
                log::warn!("discarding stored todos under {}: {}", self.key, e);
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> Result<Vec<Item>, StoreError> {
        match self.backend.get_item(&self.key)? {
            // A stored `null` is what an empty page used to write
            Some(json) => Ok(serde_json::from_str::<Option<Vec<Item>>>(&json)?.unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        let store = TodoStore::new(LocalStore, "todo-widget-test");
        let items = vec![Item::new(1, "buy milk")];
        store.save(&items).unwrap();
        assert_eq!(store.load(), items);
    }
}
