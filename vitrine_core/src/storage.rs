// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Durable key-value storage.
//!
//! [`KeyValueStore`] is the only persistence the page uses: one string
//! value under one key, with no expiry. The browser backend implements it
//! over `localStorage`; [`MemoryStore`] backs tests and serves as the
//! fallback when the browser refuses storage access.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString as _};
use core::fmt;

/// Why a storage operation failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The store rejected the operation, with the host's reason.
    Rejected(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(reason) => write!(f, "storage rejected operation: {reason}"),
        }
    }
}

impl core::error::Error for StorageError {}

/// String key-value persistence scoped to the page's origin.
pub trait KeyValueStore {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// An in-memory [`KeyValueStore`] that lives as long as the value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_one_key() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k"), Ok(None));
        store.set("k", "dark").unwrap();
        assert_eq!(store.get("k"), Ok(Some("dark".into())));
        store.set("k", "light").unwrap();
        assert_eq!(store.get("k"), Ok(Some("light".into())));
        assert_eq!(store.get("other"), Ok(None));
    }

    #[test]
    fn error_messages() {
        use alloc::format;
        assert_eq!(
            format!("{}", StorageError::Rejected("QuotaExceededError".into())),
            "storage rejected operation: QuotaExceededError"
        );
    }
}
