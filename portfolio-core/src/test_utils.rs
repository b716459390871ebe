//! Test utilities module
//!
//! Provides the demo site and convenient controller factories.

use std::rc::Rc;

use crate::controller::Controller;
use crate::traits::{InMemoryHistory, InMemorySessionStore};
use crate::types::{SectionId, SiteConfig};

/// Test context: controller plus platform doubles the test can manipulate
pub struct TestContext {
    pub controller: Controller,
    pub store: InMemorySessionStore,
    pub history: InMemoryHistory,
}

pub fn demo_site() -> SiteConfig {
    SiteConfig::demo().expect("demo site must be valid")
}

pub fn sid(id: &str) -> SectionId {
    SectionId::new(id)
}

/// Create a controller over the given storage and history (without load)
pub fn controller_with(store: &InMemorySessionStore, history: &InMemoryHistory) -> Controller {
    Controller::new(
        demo_site(),
        Rc::new(store.clone()),
        Rc::new(history.clone()),
    )
    .expect("demo controller")
}

/// Create and load a controller
pub fn loaded_context() -> TestContext {
    let store = InMemorySessionStore::new();
    let history = InMemoryHistory::new();
    let mut controller = controller_with(&store, &history);
    controller.load();
    controller.take_effects();
    TestContext {
        controller,
        store,
        history,
    }
}

/// Simulate a reload within one session: the old controller unloads, a new one sharing the storage loads
pub fn reload(ctx: TestContext) -> TestContext {
    let TestContext {
        mut controller,
        store,
        history,
    } = ctx;
    controller.unload();
    drop(controller);
    let mut controller = controller_with(&store, &history);
    controller.load();
    TestContext {
        controller,
        store,
        history,
    }
}
