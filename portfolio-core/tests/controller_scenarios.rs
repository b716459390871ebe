//! Controller behaviour driven through `Message`s, asserted on projections.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::rc::Rc;

use pretty_assertions::assert_eq;

use portfolio_core::types::ImageRef;
use portfolio_core::view::{image_source, is_active, is_visible};
use portfolio_core::{
    project, update, Controller, DisplayCommand, HistoryAdapter, InMemoryHistory,
    InMemorySessionStore, Key, Message, SectionId, SiteConfig, Target,
};

struct Harness {
    controller: Controller,
    store: InMemorySessionStore,
    history: InMemoryHistory,
}

impl Harness {
    fn new() -> Self {
        Self::with(InMemorySessionStore::new(), InMemoryHistory::new())
    }

    fn with(store: InMemorySessionStore, history: InMemoryHistory) -> Self {
        let config = SiteConfig::demo().expect("demo site");
        let mut controller =
            Controller::new(config, Rc::new(store.clone()), Rc::new(history.clone()))
                .expect("controller");
        update(&mut controller, Message::Loaded);
        Self {
            controller,
            store,
            history,
        }
    }

    fn send(&mut self, msg: Message) {
        update(&mut self.controller, msg);
    }

    fn reload(self) -> Self {
        let Self {
            mut controller,
            store,
            history,
        } = self;
        update(&mut controller, Message::Unloading);
        drop(controller);
        Self::with(store, history)
    }

    fn active(&self) -> Option<String> {
        self.controller.active_section().map(ToString::to_string)
    }

    fn commands(&self) -> Vec<DisplayCommand> {
        project(&self.controller)
    }

    fn active_sections(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter_map(|c| match c {
                DisplayCommand::SetActive {
                    target: Target::Section(id),
                    active: true,
                } => Some(id.to_string()),
                _ => None,
            })
            .collect()
    }

    fn expanded_groups(&self) -> usize {
        self.commands()
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    DisplayCommand::SetActive {
                        target: Target::GalleryGroup(_),
                        active: true,
                    }
                )
            })
            .count()
    }
}

fn sid(id: &str) -> SectionId {
    SectionId::new(id)
}

fn series_images(h: &Harness) -> Vec<ImageRef> {
    h.controller
        .config()
        .image_set("series-1-gallery")
        .unwrap()
        .images
        .clone()
}

// ===== Invariants =====

#[test]
fn exactly_one_section_active_after_every_operation() {
    let mut h = Harness::new();
    let script = vec![
        Message::NavClicked(0),
        Message::UnitThumbnailClicked(sid("sectionB")),
        Message::SubNavNext,
        Message::SubNavBack,
        Message::NavClicked(3),
        Message::SeriesThumbnailClicked(sid("Gallery-series-3")),
        Message::SubNavNext,
        Message::TitleClicked,
        Message::HubLinkClicked {
            target: sid("sectionE"),
            scroll: Some("#sectionE .image-block".to_string()),
        },
        Message::StickyLinkClicked("u3-Gallery".to_string()),
        Message::NavClicked(4),
    ];
    for msg in script {
        h.send(msg.clone());
        assert_eq!(h.active_sections().len(), 1, "after {msg:?}");
    }
}

#[test]
fn at_most_one_gallery_group_expanded() {
    let mut h = Harness::new();
    assert_eq!(h.expanded_groups(), 1);
    for msg in [
        Message::GalleryTopClicked("group-characters".to_string()),
        Message::GalleryTopClicked("group-sketchbook".to_string()),
        Message::GalleryTopClicked("group-sketchbook".to_string()),
        Message::MiddleItemClicked {
            group: "group-characters".to_string(),
            index: 0,
        },
        Message::GalleryTopClicked("group-characters".to_string()),
    ] {
        h.send(msg);
        assert!(h.expanded_groups() <= 1);
    }
}

#[test]
fn activate_is_idempotent() {
    let mut h = Harness::new();
    h.send(Message::NavClicked(1));
    h.send(Message::UnitThumbnailClicked(sid("sectionF")));
    let once = h.commands();
    h.send(Message::UnitThumbnailClicked(sid("sectionF")));
    assert_eq!(h.commands(), once);
}

#[test]
fn active_section_survives_reload() {
    let mut h = Harness::new();
    h.send(Message::NavClicked(0));
    h.send(Message::UnitThumbnailClicked(sid("sectionD")));
    let h = h.reload();
    assert_eq!(h.active(), Some("sectionD".to_string()));
    assert!(h.controller.sub_nav_visible());
    assert_eq!(h.controller.navigator().active_nav(), None);
}

#[test]
fn nav_entry_restored_with_its_section() {
    let mut h = Harness::new();
    h.send(Message::NavClicked(4));
    let h = h.reload();
    let commands = h.commands();
    assert_eq!(is_active(&commands, &Target::NavEntry(4)), Some(true));
    assert_eq!(is_active(&commands, &Target::PrintsIndicator), Some(true));
}

#[test]
fn reload_after_storage_lost_keeps_initial_section() {
    let mut h = Harness::new();
    h.send(Message::NavClicked(2));
    h.store.clear();
    let h = h.reload();
    // unloading writes again, so clear the storage after unload
    assert_eq!(h.active(), Some("Unit3".to_string()));

    h.store.clear();
    let fresh = Harness::with(h.store.clone(), h.history.clone());
    assert_eq!(fresh.active(), Some("landing".to_string()));
}

#[test]
fn sub_group_steps_wrap_around() {
    let mut h = Harness::new();
    h.send(Message::NavClicked(1));
    h.send(Message::UnitThumbnailClicked(sid("sectionG")));
    for _ in 0..4 {
        h.send(Message::SubNavNext);
    }
    assert_eq!(h.active(), Some("sectionG".to_string()));
    for _ in 0..4 {
        h.send(Message::SubNavBack);
    }
    assert_eq!(h.active(), Some("sectionG".to_string()));
}

#[test]
fn singleton_lightbox_prev_is_a_no_op() {
    let mut h = Harness::new();
    h.send(Message::ImageClicked {
        container: None,
        index: 0,
        image: ImageRef::new("img/about/portrait.jpg"),
    });
    h.send(Message::LightboxPrev);
    let session = h.controller.lightbox().session().unwrap();
    assert_eq!(session.index(), 0);
    let commands = h.commands();
    assert_eq!(is_visible(&commands, &Target::LightboxPrev), Some(false));
    assert_eq!(is_visible(&commands, &Target::LightboxNext), Some(false));
}

#[test]
fn lightbox_arrows_visible_in_the_middle() {
    let mut h = Harness::new();
    let images = series_images(&h);
    h.send(Message::ImageClicked {
        container: Some("series-1-gallery".to_string()),
        index: 1,
        image: images[1].clone(),
    });
    let commands = h.commands();
    assert_eq!(is_visible(&commands, &Target::LightboxPrev), Some(true));
    assert_eq!(is_visible(&commands, &Target::LightboxNext), Some(true));
}

// ===== Scenarios =====

#[test]
fn paging_through_unit1() {
    let mut h = Harness::new();
    h.send(Message::NavClicked(0));
    h.send(Message::UnitThumbnailClicked(sid("sectionB")));
    h.send(Message::SubNavNext);
    assert_eq!(h.active(), Some("sectionC".to_string()));

    h.send(Message::UnitThumbnailClicked(sid("sectionA")));
    h.send(Message::SubNavBack);
    assert_eq!(h.active(), Some("sectionD".to_string()));
}

#[test]
fn middle_item_drives_viewer() {
    let mut h = Harness::new();
    h.send(Message::MiddleItemClicked {
        group: "group-sketchbook".to_string(),
        index: 2,
    });
    let commands = h.commands();
    assert_eq!(
        image_source(&commands, &Target::Viewer("group-sketchbook".to_string())),
        Some("img/sketch/rooftops.jpg")
    );
    let active_items: Vec<usize> = commands
        .iter()
        .filter_map(|c| match c {
            DisplayCommand::SetActive {
                target: Target::MiddleItem { group, index },
                active: true,
            } if group == "group-sketchbook" => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(active_items, vec![2]);
}

#[test]
fn viewer_arrows_wrap() {
    let mut h = Harness::new();
    h.send(Message::MiddleItemClicked {
        group: "group-sketchbook".to_string(),
        index: 0,
    });
    h.send(Message::ViewerPrev("group-sketchbook".to_string()));
    let commands = h.commands();
    assert_eq!(
        image_source(&commands, &Target::Viewer("group-sketchbook".to_string())),
        Some("img/sketch/rooftops.jpg")
    );
    h.send(Message::ViewerNext("group-sketchbook".to_string()));
    assert_eq!(
        h.controller
            .gallery()
            .group("group-sketchbook")
            .unwrap()
            .selected(),
        Some(0)
    );
}

#[test]
fn lightbox_walks_a_four_image_container() {
    let mut h = Harness::new();
    let images = series_images(&h);
    assert_eq!(images.len(), 4);
    h.send(Message::ImageClicked {
        container: Some("series-1-gallery".to_string()),
        index: 0,
        image: images[0].clone(),
    });

    let session = h.controller.lightbox().session().unwrap();
    assert_eq!((session.len(), session.index()), (4, 0));
    let commands = h.commands();
    assert_eq!(is_visible(&commands, &Target::LightboxPrev), Some(false));
    assert_eq!(is_visible(&commands, &Target::LightboxNext), Some(true));

    for _ in 0..3 {
        h.send(Message::LightboxNext);
    }
    assert_eq!(h.controller.lightbox().session().unwrap().index(), 3);
    let commands = h.commands();
    assert_eq!(is_visible(&commands, &Target::LightboxPrev), Some(true));
    assert_eq!(is_visible(&commands, &Target::LightboxNext), Some(false));
    assert_eq!(
        image_source(&commands, &Target::LightboxImage),
        Some("img/s1/04.jpg")
    );
}

#[test]
fn keyboard_drives_open_lightbox() {
    let mut h = Harness::new();
    let images = series_images(&h);
    h.send(Message::ImageClicked {
        container: Some("series-1-gallery".to_string()),
        index: 0,
        image: images[0].clone(),
    });
    h.send(Message::KeyUp(Key::ArrowLeft));
    assert_eq!(h.controller.lightbox().session().unwrap().index(), 3);
    h.send(Message::KeyUp(Key::ArrowRight));
    assert_eq!(h.controller.lightbox().session().unwrap().index(), 0);
    h.send(Message::KeyUp(Key::from_key_name("Escape")));
    assert!(!h.controller.lightbox().is_open());
}

#[test]
fn title_always_clears_prints_indicator() {
    let mut h = Harness::new();
    h.send(Message::NavClicked(4));
    assert_eq!(
        is_active(&h.commands(), &Target::PrintsIndicator),
        Some(true)
    );
    h.send(Message::TitleClicked);
    let commands = h.commands();
    assert_eq!(is_active(&commands, &Target::PrintsIndicator), Some(false));
    assert_eq!(
        is_active(&commands, &Target::Section(sid("landing"))),
        Some(true)
    );

    h.send(Message::TitleClicked);
    assert_eq!(
        is_active(&h.commands(), &Target::PrintsIndicator),
        Some(false)
    );
}

#[test]
fn sticky_nav_round_trip() {
    let mut h = Harness::new();
    h.send(Message::HubLinkClicked {
        target: sid("Gallery-series-1"),
        scroll: None,
    });
    assert_eq!(h.active(), Some("Gallery-series-1".to_string()));
    assert_eq!(is_visible(&h.commands(), &Target::StickyNav), Some(true));

    h.send(Message::StickyLinkClicked("u3-Research".to_string()));
    let commands = h.commands();
    assert_eq!(h.active(), Some("Unit3".to_string()));
    assert_eq!(is_visible(&commands, &Target::StickyNav), Some(false));
    assert_eq!(
        is_visible(&commands, &Target::Unit3Panel("u3-Research".to_string())),
        Some(true)
    );
    assert_eq!(h.history.current_fragment().as_deref(), Some("u3-Research"));
}
