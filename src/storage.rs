//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use recipe_book_core::{KeyValueStore, StorageError, StorageResult};
use wasm_bindgen::JsValue;

/// localStorage handle, looked up on every call so the type stays `Send + Sync`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

fn js_error(err: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", err))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        Self::local_storage()?.remove_item(key).map_err(js_error)
    }
}
