//! Key-value persistence for the dark-mode flag and joke history.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Persistence` observes the store: after each mutating operation the caller
//! passes the changed [`Slice`] and exactly that slice is written. Startup
//! reads both keys once through [`Persistence::load`].
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort. A missing store or failed write is ignored, and an
//! unreadable history value is treated as absent. There is no schema version.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{AppConfig, StorageKeys};
use crate::state::history::{HistoryEntry, JokeHistory};
use crate::state::joke::{JokeState, Restored, Slice, StateObserver};

/// String key-value store with `localStorage` semantics.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Reads return `None` and writes no-op without `csr`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store that counts writes. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    /// Seed `key` without counting it as a write.
    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Number of `set_item` calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.writes.set(self.writes.get() + 1);
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Load a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get_item(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value under `key`.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    store.set_item(key, &raw);
}

#[derive(Clone, Debug)]
pub struct Persistence<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, config: &AppConfig) -> Self {
        Self { store, keys: config.storage_keys.clone() }
    }

    /// Read both persisted slices.
    ///
    /// `prefers_dark` is the ambient theme, used only when no dark-mode
    /// value has been stored.
    pub fn load(&self, prefers_dark: bool) -> Restored {
        let dark_mode = self
            .store
            .get_item(&self.keys.dark_mode)
            .map_or(prefers_dark, |v| v == "true");
        let history = load_json::<Vec<HistoryEntry>>(&self.store, &self.keys.history).unwrap_or_default();
        Restored { dark_mode, history }
    }

    pub fn save_dark_mode(&self, enabled: bool) {
        self.store
            .set_item(&self.keys.dark_mode, if enabled { "true" } else { "false" });
    }

    pub fn save_history(&self, history: &JokeHistory) {
        save_json(&self.store, &self.keys.history, &history.to_vec());
    }
}

impl<S: KeyValueStore> StateObserver for Persistence<S> {
    fn notify(&self, state: &JokeState, slice: Slice) {
        match slice {
            Slice::DarkMode => self.save_dark_mode(state.dark_mode),
            Slice::History => self.save_history(&state.history),
        }
    }
}
