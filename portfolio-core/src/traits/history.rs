//! URL fragment / history abstract Trait

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{CoreError, CoreResult};

/// History Adapter Trait
///
/// Platform implementation:
/// - Browser: `BrowserHistory` (`location.hash` + `history.replaceState`)
/// - Terminal preview / tests: `InMemoryHistory`
pub trait HistoryAdapter {
    /// Current fragment without the leading `#`, if any
    fn current_fragment(&self) -> Option<String>;

    /// Rewrite the fragment without navigating
    ///
    /// # Arguments
    /// * `id` - new fragment, without `#`
    fn replace_fragment(&self, id: &str) -> CoreResult<()>;
}

/// In-memory history
#[derive(Clone, Default)]
pub struct InMemoryHistory {
    fragment: Rc<RefCell<Option<String>>>,
    rejecting: Rc<Cell<bool>>,
}

impl InMemoryHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given fragment (leading `#` is stripped)
    #[must_use]
    pub fn with_fragment(fragment: &str) -> Self {
        let history = Self::new();
        *history.fragment.borrow_mut() = normalize(fragment);
        history
    }

    /// Simulate a history API that throws on `replaceState`
    pub fn set_rejecting(&self, rejecting: bool) {
        self.rejecting.set(rejecting);
    }
}

fn normalize(fragment: &str) -> Option<String> {
    let trimmed = fragment.trim_start_matches('#');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl HistoryAdapter for InMemoryHistory {
    fn current_fragment(&self) -> Option<String> {
        self.fragment.borrow().clone()
    }

    fn replace_fragment(&self, id: &str) -> CoreResult<()> {
        if self.rejecting.get() {
            return Err(CoreError::HistoryUnavailable(
                "replaceState rejected".to_string(),
            ));
        }
        *self.fragment.borrow_mut() = normalize(id);
        Ok(())
    }
}
