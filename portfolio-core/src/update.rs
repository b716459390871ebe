//! Message dispatch
//!
//! The only entry point that mutates controller state; each `Message` variant
//! maps to one controller operation.

use crate::controller::Controller;
use crate::message::Message;

/// Handle one message
pub fn update(controller: &mut Controller, msg: Message) {
    log::trace!("update: {msg:?}");
    match msg {
        Message::Loaded => controller.load(),
        Message::Unloading => controller.unload(),

        Message::NavClicked(index) => controller.nav_clicked(index),
        Message::TitleClicked => controller.title_clicked(),
        Message::UnitThumbnailClicked(target) => controller.unit_thumbnail_clicked(&target),
        Message::SeriesThumbnailClicked(target) => controller.series_thumbnail_clicked(&target),
        Message::SubNavBack => controller.step(-1),
        Message::SubNavNext => controller.step(1),

        Message::GalleryTopClicked(group) => controller.toggle_gallery(&group),
        Message::MiddleItemClicked { group, index } => controller.select_middle(&group, index),
        Message::ViewerPrev(group) => controller.viewer_prev(&group),
        Message::ViewerNext(group) => controller.viewer_next(&group),
        Message::ViewerClicked(group) => controller.open_viewer_lightbox(&group),

        Message::ImageClicked {
            container,
            index,
            image,
        } => controller.open_lightbox(container.as_deref(), index, &image),
        Message::LightboxPrev => controller.lightbox_prev(),
        Message::LightboxNext => controller.lightbox_next(),
        Message::LightboxClose => controller.close_lightbox(),
        Message::OverlayClicked { on_image } => controller.overlay_clicked(on_image),
        Message::KeyUp(key) => controller.key_up(key),

        Message::Unit3LinkClicked(panel) => controller.unit3_link_clicked(&panel),
        Message::HubLinkClicked { target, scroll } => {
            controller.hub_link_clicked(&target, scroll.as_deref());
        }
        Message::StickyLinkClicked(panel) => controller.sticky_link_clicked(&panel),

    }
}
