//! localStorage Store
//!
//! Backs the reaction ledger with the browser's localStorage.

use gallery_core::{GalleryError, GalleryResult, KeyValueStore};

use super::js_error;

/// `window.localStorage`, when the browser allows it
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> GalleryResult<()> {
        let storage = local_storage()
            .ok_or_else(|| GalleryError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| GalleryError::Storage(js_error(e)))
    }
}
