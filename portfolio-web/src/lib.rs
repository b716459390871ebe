//! Browser binding for the portfolio controller
//!
//! Scans the page markup into a `SiteConfig`, mounts a `Controller` backed by
//! `sessionStorage` and `history.replaceState`, and turns DOM events into
//! `Message`s. Every update re-applies the full projection to the DOM.

pub mod bindings;
pub mod dom;
pub mod history;
pub mod render;
pub mod storage;

pub use history::BrowserHistory;
pub use storage::SessionStorageStore;

use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    if let Err(e) = tracing_log::LogTracer::init() {
        web_sys::console::warn_1(&format!("log bridge not installed: {e}").into());
    }

    let Some(window) = web_sys::window() else {
        web_sys::console::error_1(&"portfolio: no window".into());
        return;
    };
    let Some(document) = window.document() else {
        web_sys::console::error_1(&"portfolio: no document".into());
        return;
    };
    match bindings::mount(&window, &document) {
        Ok(()) => tracing::info!("portfolio controller mounted"),
        Err(e) => web_sys::console::error_2(&"portfolio: mount failed".into(), &e),
    }
}

/// Current display projection as JSON, for inspecting the page from devtools.
#[wasm_bindgen(js_name = currentProjection)]
pub fn current_projection() -> Option<String> {
    bindings::with_controller(|controller| {
        serde_json::to_string(&portfolio_core::project(controller)).ok()
    })
    .flatten()
}

/// The scanned site description as pretty JSON.
#[wasm_bindgen(js_name = siteConfig)]
pub fn site_config() -> Option<String> {
    bindings::with_controller(|controller| controller.config().to_json_pretty().ok()).flatten()
}
