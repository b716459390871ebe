//! Platform abstraction trait definition

mod history;
mod session_store;

pub use history::{HistoryAdapter, InMemoryHistory};
pub use session_store::{InMemorySessionStore, SessionStore};
