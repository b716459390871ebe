//! Display commands to DOM
//!
//! The whole projection is re-applied after every `update`. Each operation is
//! idempotent (toggle a class, set `hidden`, write `src`), so no diff against the
//! previous frame is kept.

use portfolio_core::{DisplayCommand, Effect, Target};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::dom::{self, query_all};

const ACTIVE: &str = "active";
const HIDDEN: &str = "hidden";
const LINK_ACTIVE: &str = "is-active";
const STICKY_ID: &str = "u3StickyNav";
const STICKY_CLASS: &str = "u3-sticky";
const STICKY_PADDING: &str = "u3-sticky-padding";

/// DOM renderer
pub struct Renderer {
    window: Window,
    document: Document,
    nav_items: Vec<Element>,
    sticky: Option<Element>,
}

impl Renderer {
    pub fn new(window: Window, document: Document, nav_items: Vec<Element>) -> Self {
        Self {
            window,
            document,
            nav_items,
            sticky: None,
        }
    }

    /// Apply a list of display commands
    ///
    /// The sticky sub-navigation is cloned here the first time it shows; the new
    /// node is returned so the caller can bind its events.
    pub fn apply(&mut self, commands: &[DisplayCommand]) -> Option<Element> {
        let mut created = None;
        for command in commands {
            match command {
                DisplayCommand::SetActive { target, active } => {
                    self.set_active(target, *active);
                }
                DisplayCommand::SetVisible { target, visible } => {
                    if *target == Target::StickyNav && self.sticky.is_none() {
                        created = self.create_sticky();
                    }
                    self.set_visible(target, *visible);
                }
                DisplayCommand::SetImageSource { target, src } => {
                    self.set_image_source(target, src);
                }
            }
        }
        created
    }

    /// Queue one-shot effects for the next frame, run in order
    pub fn schedule(&self, effects: Vec<Effect>) {
        if effects.is_empty() {
            return;
        }
        let window = self.window.clone();
        let document = self.document.clone();
        let callback = Closure::once_into_js(move || {
            for effect in &effects {
                run_effect(&window, &document, effect);
            }
        });
        let frame: &js_sys::Function = callback.unchecked_ref();
        if let Err(e) = self.window.request_animation_frame(frame) {
            log::warn!("requestAnimationFrame failed: {e:?}");
        }
    }

    fn resolve(&self, target: &Target) -> Option<Element> {
        let doc = &self.document;
        match target {
            Target::Section(id) => doc.get_element_by_id(id.as_str()),
            Target::NavEntry(index) => self.nav_items.get(*index).cloned(),
            Target::PrintsIndicator => doc.get_element_by_id("printsNav"),
            Target::SubNavBar => doc.get_element_by_id("subNavButtons"),
            Target::GalleryGroup(id) | Target::Unit3Panel(id) => doc.get_element_by_id(id),
            Target::MiddleItem { group, index } => doc
                .get_element_by_id(group)
                .and_then(|g| query_all(&g, ".middle-item").into_iter().nth(*index)),
            Target::Viewer(group) => doc
                .get_element_by_id(group)
                .and_then(|g| g.query_selector(".viewer-large").ok().flatten()),
            Target::LightboxOverlay => doc.get_element_by_id("lightboxOverlay"),
            Target::LightboxImage => doc.get_element_by_id("lightboxImg"),
            Target::LightboxPrev => doc.get_element_by_id("lightboxPrev"),
            Target::LightboxNext => doc.get_element_by_id("lightboxNext"),
            Target::Unit3Link(panel) => dom::query_document(doc, dom::UNIT3_LINKS)
                .into_iter()
                .find(|a| dom::panel_of_link(a).as_deref() == Some(panel.as_str())),
            Target::StickyNav => self.sticky.clone(),
            Target::StickyPadding => doc.body().map(Into::into),
        }
    }

    fn set_active(&self, target: &Target, active: bool) {
        let Some(el) = self.resolve(target) else {
            return;
        };
        let class = match target {
            Target::Unit3Link(_) => LINK_ACTIVE,
            Target::StickyPadding => STICKY_PADDING,
            _ => ACTIVE,
        };
        toggle_class(&el, class, active);
    }

    fn set_visible(&self, target: &Target, visible: bool) {
        let Some(el) = self.resolve(target) else {
            return;
        };
        match target {
            Target::SubNavBar => set_display(&el, if visible { "flex" } else { "none" }),
            Target::StickyNav => set_display(&el, if visible { "block" } else { "none" }),
            Target::Unit3Panel(_) => {
                if let Some(panel) = el.dyn_ref::<HtmlElement>() {
                    panel.set_hidden(!visible);
                }
            }
            _ => toggle_class(&el, HIDDEN, !visible),
        }
    }

    fn set_image_source(&self, target: &Target, src: &str) {
        if let Some(el) = self.resolve(target) {
            if let Err(e) = el.set_attribute("src", src) {
                log::debug!("Failed to set image source: {e:?}");
            }
        }
    }

    /// Clone the Unit-3 sub-navigation and attach it to the body
    fn create_sticky(&mut self) -> Option<Element> {
        let local = self
            .document
            .query_selector("#Unit3 .u3-subnav")
            .ok()
            .flatten()?;
        let clone: Element = local.clone_node_with_deep(true).ok()?.dyn_into().ok()?;
        clone.set_id(STICKY_ID);
        toggle_class(&clone, STICKY_CLASS, true);
        self.document.body()?.append_child(&clone).ok()?;
        tracing::debug!("Sticky Unit-3 sub-navigation mounted");
        self.sticky = Some(clone.clone());
        Some(clone)
    }
}

fn toggle_class(el: &Element, class: &str, on: bool) {
    if let Err(e) = el.class_list().toggle_with_force(class, on) {
        log::debug!("Failed to toggle class {class}: {e:?}");
    }
}

fn set_display(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().set_property("display", value) {
            log::debug!("Failed to set display: {e:?}");
        }
    }
}

fn run_effect(window: &Window, document: &Document, effect: &Effect) {
    match effect {
        Effect::ScrollToTop => {
            window.scroll_to_with_x_and_y(0.0, 0.0);
            if let Some(root) = document.document_element() {
                root.set_scroll_top(0);
            }
            if let Some(body) = document.body() {
                body.set_scroll_top(0);
            }
            if let Ok(Some(main)) = document.query_selector(".main-content") {
                main.set_scroll_top(0);
            }
        }
        Effect::ScrollIntoView(selector) => match document.query_selector(selector) {
            Ok(Some(anchor)) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                anchor.scroll_into_view_with_scroll_into_view_options(&options);
            }
            Ok(None) => log::debug!("Scroll anchor not found: {selector}"),
            Err(e) => log::warn!("Invalid scroll selector {selector}: {e:?}"),
        },
    }
}
