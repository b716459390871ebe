//! Interaction messages
//!
//! Renderers translate user input into `Message`s and hand them to `update`.

use crate::types::{ImageRef, SectionId};
use crate::Key;

/// Interaction message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ========== Lifecycle ==========
    /// Page finished loading
    Loaded,
    /// Page about to unload
    Unloading,

    // ========== Section navigation ==========
    /// Sidebar nav entry clicked (by index)
    NavClicked(usize),
    /// Site title clicked
    TitleClicked,
    /// Unit 1/2 sub-page thumbnail
    UnitThumbnailClicked(SectionId),
    /// Series gallery thumbnail
    SeriesThumbnailClicked(SectionId),
    /// Sub-group Back
    SubNavBack,
    /// Sub-group Next
    SubNavNext,

    // ========== Three-tier gallery ==========
    /// Top-level control clicked
    GalleryTopClicked(String),
    /// Middle item clicked
    MiddleItemClicked { group: String, index: usize },
    /// Viewer previous
    ViewerPrev(String),
    /// Viewer next
    ViewerNext(String),
    /// Viewer image clicked
    ViewerClicked(String),

    // ========== Lightbox ==========
    /// Enlargeable image clicked
    ///
    /// `index` is the image's position within `container`, so repeated images
    /// open at the copy that was clicked.
    ImageClicked {
        container: Option<String>,
        index: usize,
        image: ImageRef,
    },
    LightboxPrev,
    LightboxNext,
    LightboxClose,
    /// Overlay clicked; `on_image` is set when the image itself was hit
    OverlayClicked { on_image: bool },
    /// Key released
    KeyUp(Key),

    // ========== Unit-3 ==========
    /// Inline sub-navigation link
    Unit3LinkClicked(String),
    /// Gallery Hub deep link
    HubLinkClicked {
        target: SectionId,
        scroll: Option<String>,
    },
    /// Sticky sub-navigation link
    StickyLinkClicked(String),
}
