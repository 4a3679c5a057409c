// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `localStorage` key-value store.

use alloc::string::String;

use vitrine_core::storage::{KeyValueStore, MemoryStore, StorageError};
use web_sys::{Storage, Window};

use crate::console::describe;

/// Persistent storage for the page.
///
/// Uses `localStorage` when the browser grants it. Privacy modes may deny
/// access outright; the page then keeps values in memory for its own
/// lifetime.
#[derive(Clone, Debug)]
pub enum BrowserStore {
    /// `window.localStorage`.
    Local(Storage),
    /// In-memory fallback.
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Opens `localStorage` for `window`, falling back to memory.
    #[must_use]
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            _ => Self::Memory(MemoryStore::new()),
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Local(storage) => storage
                .get_item(key)
                .map_err(|err| StorageError::Rejected(describe(&err))),
            Self::Memory(memory) => memory.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|err| StorageError::Rejected(describe(&err))),
            Self::Memory(memory) => memory.set(key, value),
        }
    }
}
