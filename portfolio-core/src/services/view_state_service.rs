//! Page state persistence service
//!
//! Written once before unload and read once on load. Within a session the
//! controller's own state is authoritative; the stored copy only serves restores
//! after a reload.

use std::rc::Rc;

use crate::traits::SessionStore;
use crate::types::SectionId;

/// Storage key of the current Section
pub const ACTIVE_SECTION_KEY: &str = "activeSectionId";
/// Storage key of the scroll position
pub const SCROLL_KEY: &str = "scrollY";
/// Constant scroll placeholder value
pub const SCROLL_MARKER: &str = "0";

/// Page state persistence service
pub struct ViewStateService {
    store: Rc<dyn SessionStore>,
}

impl ViewStateService {
    /// Create service instance
    #[must_use]
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Write the current Section and the scroll placeholder
    ///
    /// Without an active Section only the placeholder is written. Write failures
    /// are only logged.
    pub fn save(&self, active: Option<&SectionId>) {
        if let Some(id) = active {
            if let Err(e) = self.store.set(ACTIVE_SECTION_KEY, id.as_str()) {
                log::debug!("Failed to save page state: {e}");
            }
        }
        if let Err(e) = self.store.set(SCROLL_KEY, SCROLL_MARKER) {
            log::debug!("Failed to save scroll placeholder: {e}");
        }
    }

    /// Read the last saved Section
    ///
    /// Returns `None` when storage is unavailable or nothing was saved.
    pub fn load(&self) -> Option<SectionId> {
        match self.store.get(ACTIVE_SECTION_KEY) {
            Ok(Some(id)) if !id.is_empty() => Some(SectionId::new(id)),
            Ok(_) => None,
            Err(e) => {
                log::debug!("Failed to read page state, treating as unsaved: {e}");
                None
            }
        }
    }
}
