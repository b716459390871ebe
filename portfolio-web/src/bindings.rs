//! DOM events to `Message`s
//!
//! The controller and renderer live in a thread-local `RefCell`; every listener
//! only translates its event into one message for [`dispatch`]. Listener closures
//! live as long as the page, so they are `forget`-ed once registered.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::{project, update, Controller, Key, Message, SectionId};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent, Window};

use crate::dom::{self, query_all, query_document, ScannedPage};
use crate::history::BrowserHistory;
use crate::render::Renderer;
use crate::storage::SessionStorageStore;

struct WebApp {
    controller: Controller,
    renderer: Renderer,
}

thread_local! {
    static APP: RefCell<Option<WebApp>> = const { RefCell::new(None) };
}

/// Scan the page, create the controller and bind every event
pub fn mount(window: &Window, document: &Document) -> Result<(), JsValue> {
    let ScannedPage { config, nav_items } =
        dom::scan(document).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let controller = Controller::new(
        config,
        Rc::new(SessionStorageStore::new()),
        Rc::new(BrowserHistory::new()),
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let renderer = Renderer::new(window.clone(), document.clone(), nav_items.clone());
    APP.with(|app| {
        *app.borrow_mut() = Some(WebApp {
            controller,
            renderer,
        });
    });

    bind_navigation(document, &nav_items)?;
    bind_gallery(document)?;
    bind_lightbox(document)?;
    bind_unit3(document)?;
    on(window, "beforeunload", |_| dispatch(Message::Unloading))?;

    dispatch(Message::Loaded);
    Ok(())
}

/// Handle one message and write the new projection back to the page
pub fn dispatch(msg: Message) {
    let created = APP.with(|app| {
        let Ok(mut slot) = app.try_borrow_mut() else {
            log::warn!("Ignoring re-entrant message: {msg:?}");
            return None;
        };
        let Some(app) = slot.as_mut() else {
            log::warn!("Controller not mounted, ignoring message: {msg:?}");
            return None;
        };
        update(&mut app.controller, msg);
        let created = app.renderer.apply(&project(&app.controller));
        app.renderer.schedule(app.controller.take_effects());
        created
    });
    if let Some(sticky) = created {
        if let Err(e) = bind_sticky(&sticky) {
            log::warn!("Failed to bind sticky sub-navigation: {e:?}");
        }
    }
}

/// Read-only access to the current controller
pub fn with_controller<R>(f: impl FnOnce(&Controller) -> R) -> Option<R> {
    APP.with(|app| app.try_borrow().ok()?.as_ref().map(|a| f(&a.controller)))
}

fn on(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Send a fixed message on click
fn on_click(target: &EventTarget, msg: Message, prevent_default: bool) -> Result<(), JsValue> {
    on(target, "click", move |event| {
        if prevent_default {
            event.prevent_default();
        }
        dispatch(msg.clone());
    })
}

fn bind_navigation(document: &Document, nav_items: &[Element]) -> Result<(), JsValue> {
    for (index, item) in nav_items.iter().enumerate() {
        on_click(item, Message::NavClicked(index), false)?;
    }
    if let Some(title) = document.query_selector(".title-link")? {
        on_click(&title, Message::TitleClicked, true)?;
    }
    if let Some(back) = document.get_element_by_id("btnBackSub") {
        on_click(&back, Message::SubNavBack, false)?;
    }
    if let Some(next) = document.get_element_by_id("btnNextSub") {
        on_click(&next, Message::SubNavNext, false)?;
    }

    for figure in query_document(document, dom::UNIT_THUMBNAILS) {
        if let Some(target) = figure.get_attribute("data-target") {
            on_click(
                &figure,
                Message::UnitThumbnailClicked(SectionId::new(target)),
                false,
            )?;
        }
    }
    for img in query_document(document, dom::SERIES_THUMBNAILS) {
        if let Some(target) = img.get_attribute("data-target") {
            on_click(
                &img,
                Message::SeriesThumbnailClicked(SectionId::new(target)),
                false,
            )?;
        }
    }
    Ok(())
}

fn bind_gallery(document: &Document) -> Result<(), JsValue> {
    for top in query_document(document, ".top-item[data-target]") {
        if let Some(group) = top.get_attribute("data-target") {
            on_click(&top, Message::GalleryTopClicked(group), false)?;
        }
    }

    for group in query_document(document, dom::GALLERY_GROUP) {
        let id = group.id();
        if id.is_empty() {
            continue;
        }
        for (position, item) in query_all(&group, ".middle-item").iter().enumerate() {
            let index = dom::parse_index(item.get_attribute("data-index").as_deref(), position);
            on_click(
                item,
                Message::MiddleItemClicked {
                    group: id.clone(),
                    index,
                },
                false,
            )?;
        }
        if let Some(prev) = group.query_selector(".viewer-prev")? {
            on_click(&prev, Message::ViewerPrev(id.clone()), false)?;
        }
        if let Some(next) = group.query_selector(".viewer-next")? {
            on_click(&next, Message::ViewerNext(id.clone()), false)?;
        }
        if let Some(viewer) = group.query_selector(".viewer-large")? {
            on_click(&viewer, Message::ViewerClicked(id.clone()), false)?;
        }
    }

    for img in query_document(document, dom::CONTAINER_IMAGES) {
        if img.class_list().contains("viewer-large") {
            continue;
        }
        let Some(image) = dom::image_ref(&img) else {
            continue;
        };
        let parent = img.closest(dom::IMAGE_CONTAINERS).ok().flatten();
        let container = parent.as_ref().and_then(dom::set_id_of);
        let index = parent
            .as_ref()
            .and_then(|c| dom::ordinal_in(c, &img))
            .unwrap_or(0);
        on_click(
            &img,
            Message::ImageClicked {
                container,
                index,
                image,
            },
            false,
        )?;
    }
    Ok(())
}

fn bind_lightbox(document: &Document) -> Result<(), JsValue> {
    if let Some(close) = document.get_element_by_id("lightboxClose") {
        on_click(&close, Message::LightboxClose, false)?;
    }
    if let Some(prev) = document.get_element_by_id("lightboxPrev") {
        on_click(&prev, Message::LightboxPrev, false)?;
    }
    if let Some(next) = document.get_element_by_id("lightboxNext") {
        on_click(&next, Message::LightboxNext, false)?;
    }
    if let Some(overlay) = document.get_element_by_id("lightboxOverlay") {
        on(&overlay, "click", |event| {
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| el.id());
            // buttons have their own listeners; ignore clicks bubbling up from them
            match target.as_deref() {
                Some("lightboxOverlay") => dispatch(Message::OverlayClicked { on_image: false }),
                Some("lightboxImg") => dispatch(Message::OverlayClicked { on_image: true }),
                _ => {}
            }
        })?;
    }
    on(document, "keyup", |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            dispatch(Message::KeyUp(Key::from_key_name(&key.key())));
        }
    })
}

fn bind_unit3(document: &Document) -> Result<(), JsValue> {
    for link in query_document(document, dom::UNIT3_LINKS) {
        if let Some(panel) = dom::panel_of_link(&link) {
            on_click(&link, Message::Unit3LinkClicked(panel), true)?;
        }
    }
    for el in query_document(document, dom::HUB_LINKS) {
        let Some(target) = el.get_attribute("data-target") else {
            continue;
        };
        let msg = Message::HubLinkClicked {
            target: SectionId::new(target),
            scroll: el.get_attribute("data-scroll").filter(|s| !s.is_empty()),
        };
        on_click(&el, msg, true)?;
    }
    Ok(())
}

fn bind_sticky(sticky: &Element) -> Result<(), JsValue> {
    for link in query_all(sticky, ".u3-subnav__link") {
        if let Some(panel) = dom::panel_of_link(&link) {
            on_click(&link, Message::StickyLinkClicked(panel), true)?;
        }
    }
    Ok(())
}

