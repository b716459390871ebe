//! Portfolio Core Library
//!
//! Interaction logic for a single-page portfolio site, independent of any
//! rendering surface:
//! - Section navigation with sub-group paging
//! - Three-tier gallery and lightbox
//! - Unit-3 panel sub-navigation with a sticky copy
//! - Session persistence of the active section
//!
//! The platform is abstracted through traits (`SessionStore`, `HistoryAdapter`);
//! renderers feed `Message`s into `update` and apply the commands returned by
//! `project`. Used by the browser (wasm) front-end and the terminal preview.

pub mod controller;
pub mod error;
pub mod keymap;
pub mod message;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod update;
pub mod view;

#[cfg(test)]
#[allow(clippy::expect_used)]
mod test_utils;

// Re-export common types
pub use controller::Controller;
pub use error::{CoreError, CoreResult};
pub use keymap::Key;
pub use message::Message;
pub use traits::{HistoryAdapter, InMemoryHistory, InMemorySessionStore, SessionStore};
pub use types::{DisplayCommand, Effect, SectionId, SiteConfig, Target};
pub use update::update;
pub use view::project;
