//! `window.sessionStorage` adapter

use portfolio_core::{CoreError, CoreResult, SessionStore};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// Session storage
///
/// In private mode `sessionStorage` may be missing or throw on access. Every call
/// then returns `StorageUnavailable`, which the controller treats as "nothing saved".
#[derive(Default)]
pub struct SessionStorageStore {
    storage: Option<Storage>,
}

impl SessionStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("sessionStorage unavailable, page state will not survive a reload");
        }
        Self { storage }
    }

    fn storage(&self) -> CoreResult<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| CoreError::StorageUnavailable("sessionStorage missing".to_string()))
    }
}

pub(crate) fn js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl SessionStore for SessionStorageStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| CoreError::StorageUnavailable(js_error(&e)))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| CoreError::StorageUnavailable(js_error(&e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_storage_reports_unavailable() {
        let store = SessionStorageStore::default();
        assert!(matches!(
            store.get("activeSectionId"),
            Err(CoreError::StorageUnavailable(_))
        ));
        assert!(store.set("scrollY", "0").is_err());
    }
}
