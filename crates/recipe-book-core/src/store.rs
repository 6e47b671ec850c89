//! Key-Value Store
//!
//! Abstract string store backing the persisted session and favorites.
//! The browser implementation lives in the UI crate (localStorage);
//! `MemoryStore` serves tests and non-browser hosts.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{StorageError, StorageResult};

/// Synchronous string-keyed storage
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a key; absent keys are not an error
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// In-memory store. Clones share the same map, so a clone outlives
/// the controller that wrote to it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StorageResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
