//! Business logic services

mod view_state_service;

pub use view_state_service::{
    ViewStateService, ACTIVE_SECTION_KEY, SCROLL_KEY, SCROLL_MARKER,
};
