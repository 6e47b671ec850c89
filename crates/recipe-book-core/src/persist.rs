//! Persistence Helpers
//!
//! JSON mirrors of the session user and favorites. Reads never fail:
//! absent or malformed entries fall back to "no user" / empty set.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageResult;
use crate::models::{FavoriteSet, User};
use crate::store::KeyValueStore;

fn load_json<T: DeserializeOwned, S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("[STORE] read of '{}' failed: {}", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[STORE] ignoring malformed '{}': {}", key, e);
            None
        }
    }
}

fn save_json<T: Serialize, S: KeyValueStore + ?Sized>(store: &S, key: &str, value: &T) -> StorageResult<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

pub fn load_user<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<User> {
    load_json(store, key)
}

pub fn save_user<S: KeyValueStore + ?Sized>(store: &S, key: &str, user: &User) -> StorageResult<()> {
    save_json(store, key, user)
}

pub fn clear_user<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> StorageResult<()> {
    store.remove(key)
}

pub fn load_favorites<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> FavoriteSet {
    load_json(store, key).unwrap_or_default()
}

pub fn save_favorites<S: KeyValueStore + ?Sized>(store: &S, key: &str, favorites: &FavoriteSet) -> StorageResult<()> {
    save_json(store, key, favorites)
}
