//! `location.hash` / `history.replaceState` adapter

use portfolio_core::{CoreError, CoreResult, HistoryAdapter};
use wasm_bindgen::JsValue;

use crate::storage::js_error;

/// Address bar fragment
#[derive(Default)]
pub struct BrowserHistory;

impl BrowserHistory {
    pub fn new() -> Self {
        Self
    }
}

/// Strip the leading `#`; an empty fragment counts as none
pub(crate) fn strip_hash(raw: &str) -> Option<&str> {
    let id = raw.trim_start_matches('#');
    (!id.is_empty()).then_some(id)
}

impl HistoryAdapter for BrowserHistory {
    fn current_fragment(&self) -> Option<String> {
        let hash = web_sys::window()?.location().hash().ok()?;
        strip_hash(&hash).map(str::to_string)
    }

    fn replace_fragment(&self, id: &str) -> CoreResult<()> {
        let history = web_sys::window()
            .ok_or_else(|| CoreError::HistoryUnavailable("no window".to_string()))?
            .history()
            .map_err(|e| CoreError::HistoryUnavailable(js_error(&e)))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")))
            .map_err(|e| CoreError::HistoryUnavailable(js_error(&e)))
    }
}
