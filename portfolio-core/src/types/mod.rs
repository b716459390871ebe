//! Type definitions

mod display;
mod image;
mod section;
mod site;

pub use display::{DisplayCommand, Effect, Target};
pub use image::ImageRef;
pub use section::SectionId;
pub use site::{
    retain_known_members, GalleryGroupConfig, HubLink, ImageSetConfig, MiddleItemConfig,
    NavEntry, PanelConfig, SectionConfig, SiteConfig, SubGroup, ThumbnailKind, ThumbnailLink,
    Unit3Config,
};
