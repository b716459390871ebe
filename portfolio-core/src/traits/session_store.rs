//! Session-scoped key/value storage abstract Trait

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{CoreError, CoreResult};

/// Session Storage Trait
///
/// Platform implementation:
/// - Browser: `SessionStorageStore` (`window.sessionStorage`)
/// - Terminal preview / tests: `InMemorySessionStore`
///
/// The controller runs on a single UI thread, so implementations are not
/// required to be `Send`.
pub trait SessionStore {
    /// Read a value
    ///
    /// # Arguments
    /// * `key` - storage key
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Write a value
    ///
    /// # Arguments
    /// * `key` - storage key
    /// * `value` - value to store
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
}

/// In-memory session store
///
/// Clones share the same map, so a store handed to one controller survives
/// that controller being dropped (a simulated reload within one session).
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    unavailable: Rc<Cell<bool>>,
}

impl InMemorySessionStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate inaccessible storage (privacy mode): every call fails.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    /// Drop every stored value (the session ended)
    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }

    fn check(&self) -> CoreResult<()> {
        if self.unavailable.get() {
            Err(CoreError::StorageUnavailable(
                "session storage disabled".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        self.check()?;
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.check()?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_values() {
        let store = InMemorySessionStore::new();
        let other = store.clone();
        store.set("activeSectionId", "sectionB").unwrap();
        assert_eq!(
            other.get("activeSectionId").unwrap().as_deref(),
            Some("sectionB")
        );
    }

    #[test]
    fn unavailable_store_fails_every_call() {
        let store = InMemorySessionStore::new();
        store.set_unavailable(true);
        assert!(store.get("scrollY").is_err());
        assert!(store.set("scrollY", "0").is_err());
    }
}
