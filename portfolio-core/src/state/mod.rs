//! Component state owned by the controller
//!
//! Data and invariants only. Persistence and side effects are orchestrated by
//! `Controller`.

mod gallery;
mod lightbox;
mod navigator;
mod paginator;
mod unit3;

pub use gallery::{GalleryBoard, GalleryGroup, Toggle};
pub use lightbox::{Lightbox, LightboxSession};
pub use navigator::SectionNavigator;
pub use paginator::SubGroupPaginator;
pub use unit3::{StickyNav, Unit3Subnav};
