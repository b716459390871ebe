//! Display command type definitions
//!
//! The controller never touches the page. `view::project` turns model state into
//! a list of commands that a renderer (browser DOM or terminal) applies.

use serde::Serialize;

use super::SectionId;

/// Page element a command applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum Target {
    /// Content Section
    Section(SectionId),
    /// Sidebar nav entry (index in document order)
    NavEntry(usize),
    /// "prints" indicator
    PrintsIndicator,
    /// Sub-group Back / Next button bar
    SubNavBar,
    /// Three-tier gallery group
    GalleryGroup(String),
    /// Middle item within a gallery group
    MiddleItem { group: String, index: usize },
    /// Enlarged viewer of a gallery group
    Viewer(String),
    /// Lightbox overlay
    LightboxOverlay,
    /// Lightbox image
    LightboxImage,
    /// Lightbox previous button
    LightboxPrev,
    /// Lightbox next button
    LightboxNext,
    /// Unit-3 panel
    Unit3Panel(String),
    /// Unit-3 sub-navigation link (by panel id)
    Unit3Link(String),
    /// Sticky copy of the Unit-3 sub-navigation
    StickyNav,
    /// Body padding while the sticky navigation shows
    StickyPadding,
}

/// Display command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DisplayCommand {
    /// Toggle the "active" state (Sections, nav entries, gallery groups, lightbox overlay)
    SetActive { target: Target, active: bool },
    /// Toggle visibility (sub-navigation bar, lightbox arrows, Unit-3 panels, sticky navigation)
    SetVisible { target: Target, visible: bool },
    /// Set an image source
    SetImageSource { target: Target, src: String },
}

impl DisplayCommand {
    pub fn target(&self) -> &Target {
        match self {
            Self::SetActive { target, .. }
            | Self::SetVisible { target, .. }
            | Self::SetImageSource { target, .. } => target,
        }
    }
}

/// One-shot side effect (fire and forget, no result)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "selector", rename_all = "camelCase")]
pub enum Effect {
    /// Return to the top of the page on the next frame
    ScrollToTop,
    /// Smooth-scroll to an anchor
    ScrollIntoView(String),
}
