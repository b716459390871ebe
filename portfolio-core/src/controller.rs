//! Top-level controller
//!
//! Owns all page state (current Section, expanded gallery group, lightbox
//! session, Unit-3 panel). Every public operation clears competing state before
//! writing the new state, so afterwards these hold:
//! - exactly one Section is active (except when a caller names an unknown target)
//! - at most one gallery group is expanded
//! - at most one lightbox session exists

use std::rc::Rc;

use crate::error::{CoreError, CoreResult};
use crate::services::ViewStateService;
use crate::state::{
    GalleryBoard, Lightbox, SectionNavigator, SubGroupPaginator, Toggle, Unit3Subnav,
};
use crate::traits::{HistoryAdapter, SessionStore};
use crate::types::{Effect, ImageRef, SectionId, SiteConfig};
use crate::Key;

/// Top-level controller
pub struct Controller {
    config: SiteConfig,
    navigator: SectionNavigator,
    paginator: SubGroupPaginator,
    gallery: GalleryBoard,
    lightbox: Lightbox,
    unit3: Option<Unit3Subnav>,
    sub_nav_visible: bool,
    view_state: ViewStateService,
    history: Rc<dyn HistoryAdapter>,
    effects: Vec<Effect>,
}

impl Controller {
    /// Create a controller from a site description and platform adapters
    pub fn new(
        config: SiteConfig,
        store: Rc<dyn SessionStore>,
        history: Rc<dyn HistoryAdapter>,
    ) -> CoreResult<Self> {
        config.validate()?;
        let navigator = SectionNavigator::new(&config);
        let paginator = SubGroupPaginator::new(config.sub_groups.clone());
        let gallery = GalleryBoard::new(&config.galleries);
        let unit3 = config.unit3.as_ref().map(Unit3Subnav::new);
        let sub_nav_visible = paginator.bar_visible(navigator.active());

        log::debug!(
            "Controller created: {} sections, {} gallery groups, {} image sets",
            config.sections.len(),
            config.galleries.len(),
            config.image_sets.len()
        );

        Ok(Self {
            config,
            navigator,
            paginator,
            gallery,
            lightbox: Lightbox::new(),
            unit3,
            sub_nav_visible,
            view_state: ViewStateService::new(store),
            history,
            effects: Vec::new(),
        })
    }

    // ===== Queries =====

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn navigator(&self) -> &SectionNavigator {
        &self.navigator
    }

    pub fn paginator(&self) -> &SubGroupPaginator {
        &self.paginator
    }

    pub fn gallery(&self) -> &GalleryBoard {
        &self.gallery
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn unit3(&self) -> Option<&Unit3Subnav> {
        self.unit3.as_ref()
    }

    pub fn active_section(&self) -> Option<&SectionId> {
        self.navigator.active()
    }

    pub fn sub_nav_visible(&self) -> bool {
        self.sub_nav_visible
    }

    /// Take the pending one-shot effects
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn pending_effects(&self) -> &[Effect] {
        &self.effects
    }

    // ===== Lifecycle =====

    /// Page load: restore page state, expand the first gallery group, initialize the Unit-3 panel
    pub fn load(&mut self) {
        self.restore();

        if let Some(first) = self.gallery.expand_first() {
            log::debug!("Expanded gallery group {} by default", first.id);
            self.save();
        }

        let fragment = self.history.current_fragment();
        if let Some(unit3) = self.unit3.as_mut() {
            let shown = unit3.init(fragment.as_deref());
            log::debug!("Unit-3 initial panel: {shown}");
        }
    }

    /// Page about to unload
    pub fn unload(&mut self) {
        self.save();
    }

    /// Persist the current Section
    pub fn save(&self) {
        self.view_state.save(self.navigator.active());
    }

    /// Restore from session storage
    ///
    /// A saved id that is not a known Section counts as unsaved and the initial Section stays.
    pub fn restore(&mut self) {
        if let Some(stored) = self.view_state.load() {
            if self.navigator.contains(&stored) {
                let nav = self.navigator.nav_index_of(&stored);
                if let Err(e) = self.navigator.activate(&stored, nav) {
                    e.log("restore page state");
                } else {
                    log::info!("Restored section {stored}");
                }
            } else {
                log::warn!("Ignoring unknown saved section: {stored}");
            }
        }
        self.effects.push(Effect::ScrollToTop);
        self.refresh_sub_nav();
    }

    // ===== Section navigation =====

    /// Refresh sub-navigation bar visibility
    pub fn refresh_sub_nav(&mut self) {
        self.sub_nav_visible = self.paginator.bar_visible(self.navigator.active());
    }

    /// Activate a Section and its nav entry
    pub fn activate(&mut self, target: &SectionId) {
        let nav = self.navigator.nav_index_of(target);
        self.activate_with_nav(target, nav);
    }

    fn activate_with_nav(&mut self, target: &SectionId, nav: Option<usize>) {
        if let Err(e) = self.navigator.activate(target, nav) {
            e.log("activate section");
        }
        self.after_navigation();
        self.close_lightbox();
    }

    /// Switch the Section only (paging, series thumbnails, Hub links)
    fn reveal(&mut self, target: &SectionId) {
        if let Err(e) = self.navigator.reveal(target) {
            e.log("reveal section");
        }
        self.after_navigation();
    }

    fn after_navigation(&mut self) {
        self.effects.push(Effect::ScrollToTop);
        self.save();
        self.refresh_sub_nav();
    }

    /// Sidebar nav entry clicked
    pub fn nav_clicked(&mut self, index: usize) {
        let Some(target) = self.navigator.nav_target(index).cloned() else {
            CoreError::NavEntryNotFound(index).log("nav entry clicked");
            return;
        };
        self.disable_sticky();
        self.activate_with_nav(&target, Some(index));
    }

    /// Site title clicked: always back to landing
    pub fn title_clicked(&mut self) {
        let landing = self.config.landing.clone();
        self.activate(&landing);
    }

    /// Unit 1/2 sub-page thumbnail
    pub fn unit_thumbnail_clicked(&mut self, target: &SectionId) {
        self.activate(target);
    }

    /// Series gallery thumbnail
    pub fn series_thumbnail_clicked(&mut self, target: &SectionId) {
        self.reveal(target);
    }

    // ===== Sub-group paging =====

    /// Name of the group containing the Section
    pub fn group_of(&self, id: &SectionId) -> Option<&str> {
        self.paginator.group_of(id).map(|g| g.name.as_str())
    }

    /// Move back or forward within the current group (wrapping)
    pub fn step(&mut self, delta: isize) {
        let Some(target) = self
            .paginator
            .target(self.navigator.active(), delta)
            .cloned()
        else {
            log::debug!("Current section belongs to no group, ignoring paging");
            return;
        };
        self.reveal(&target);
    }

    // ===== Three-tier gallery =====

    /// Top-level control clicked
    pub fn toggle_gallery(&mut self, group: &str) {
        match self.gallery.toggle(group) {
            Ok(Toggle::Expanded { selected: true }) => self.save(),
            Ok(_) => {}
            Err(e) => e.log("toggle gallery group"),
        }
    }

    /// Select a middle item
    pub fn select_middle(&mut self, group: &str, index: usize) {
        match self.gallery.select_middle(group, index) {
            Ok(()) => self.save(),
            Err(e) => e.log("select middle item"),
        }
    }

    /// Viewer previous
    pub fn viewer_prev(&mut self, group: &str) {
        match self.gallery.prev(group) {
            Ok(_) => self.save(),
            Err(e) => e.log("gallery previous"),
        }
    }

    /// Viewer next
    pub fn viewer_next(&mut self, group: &str) {
        match self.gallery.next(group) {
            Ok(_) => self.save(),
            Err(e) => e.log("gallery next"),
        }
    }

    // ===== Lightbox =====

    /// Open the lightbox on a clicked image.
    ///
    /// `container` names the image set the trigger sits in and `index` is the
    /// trigger's ordinal inside that container. A set may hold the same image
    /// more than once, so the ordinal wins over a value lookup. With no
    /// container, or an unknown one, the trigger opens on its own.
    pub fn open_lightbox(&mut self, container: Option<&str>, index: usize, trigger: &ImageRef) {
        let images = match container {
            Some(id) => match self.config.image_set(id) {
                Some(set) => set.images.clone(),
                None => {
                    CoreError::ImageSetNotFound(id.to_string()).log("open lightbox");
                    vec![trigger.clone()]
                }
            },
            None => vec![trigger.clone()],
        };
        let position = if images.get(index) == Some(trigger) {
            Some(index)
        } else {
            // stale ordinal: fall back to the first matching image
            images.iter().position(|img| img == trigger)
        };
        let Some(position) = position else {
            CoreError::ImageNotFound(trigger.src.clone()).log("open lightbox");
            return;
        };
        if let Err(e) = self.lightbox.open(images, position) {
            e.log("open lightbox");
        }
    }

    /// Open the lightbox on a gallery group's viewer image (single image)
    pub fn open_viewer_lightbox(&mut self, group: &str) {
        let Some(src) = self
            .gallery
            .group(group)
            .and_then(|g| g.viewer_source())
            .filter(|src| !src.is_empty())
            .map(str::to_string)
        else {
            log::debug!("Gallery group {group} has no image to enlarge");
            return;
        };
        if let Err(e) = self.lightbox.open(vec![ImageRef::new(src)], 0) {
            e.log("open lightbox");
        }
    }

    pub fn lightbox_next(&mut self) {
        self.lightbox.next();
    }

    pub fn lightbox_prev(&mut self) {
        self.lightbox.prev();
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox.close();
    }

    /// Overlay clicked: a hit on the image does nothing, a hit on the backdrop closes
    pub fn overlay_clicked(&mut self, on_image: bool) {
        if !on_image {
            self.close_lightbox();
        }
    }

    /// Keyboard handling while the lightbox is open
    pub fn key_up(&mut self, key: Key) {
        if !self.lightbox.is_open() {
            return;
        }
        match key {
            Key::Escape => self.close_lightbox(),
            Key::ArrowLeft => self.lightbox_prev(),
            Key::ArrowRight => self.lightbox_next(),
            Key::Other => {}
        }
    }

    // ===== Unit-3 sub-navigation =====

    /// Show a panel, optionally rewriting the URL fragment (failures ignored)
    pub fn show_panel(&mut self, id: &str, update_fragment: bool) {
        let Some(unit3) = self.unit3.as_mut() else {
            CoreError::PanelNotFound(id.to_string()).log("show Unit-3 panel");
            return;
        };
        if let Err(e) = unit3.show_panel(id) {
            e.log("show Unit-3 panel");
            return;
        }
        if update_fragment {
            if let Err(e) = self.history.replace_fragment(id) {
                log::debug!("Failed to rewrite URL fragment, keeping the old one: {e}");
            }
        }
    }

    /// Inline sub-navigation link clicked
    pub fn unit3_link_clicked(&mut self, panel: &str) {
        self.show_panel(panel, true);
    }

    /// Gallery Hub deep link clicked: enable the sticky navigation and jump
    pub fn hub_link_clicked(&mut self, target: &SectionId, scroll: Option<&str>) {
        if let Some(unit3) = self.unit3.as_mut() {
            if unit3.enable_sticky() {
                log::debug!("Created sticky Unit-3 sub-navigation");
            }
        }
        if let Err(e) = self.navigator.reveal(target) {
            e.log("hub jump");
        }
        self.after_navigation();
        // runs after the scroll to top
        if let Some(selector) = scroll.filter(|s| !s.is_empty()) {
            self.effects.push(Effect::ScrollIntoView(selector.to_string()));
        }
        self.close_lightbox();
    }

    /// Sticky sub-navigation link clicked: back to Unit-3 and switch panel
    pub fn sticky_link_clicked(&mut self, panel: &str) {
        let Some(section) = self.unit3.as_ref().map(|u| u.section().clone()) else {
            CoreError::PanelNotFound(panel.to_string()).log("sticky link");
            return;
        };
        if let Err(e) = self.navigator.reveal(&section) {
            e.log("sticky link");
        }
        self.show_panel(panel, true);
        self.disable_sticky();
        self.after_navigation();
        self.close_lightbox();
    }

    /// Hide the sticky sub-navigation
    pub fn disable_sticky(&mut self) {
        if let Some(unit3) = self.unit3.as_mut() {
            unit3.disable_sticky();
        }
    }
}
