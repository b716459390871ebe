//! State projection
//!
//! Maps controller state to a complete list of display commands. The same state
//! always yields the same commands, so renderers apply them in order without
//! querying the current page.

use crate::controller::Controller;
use crate::types::{DisplayCommand, Target};

/// Project the whole page
pub fn project(controller: &Controller) -> Vec<DisplayCommand> {
    let mut commands = Vec::new();
    project_sections(controller, &mut commands);
    project_gallery(controller, &mut commands);
    project_lightbox(controller, &mut commands);
    project_unit3(controller, &mut commands);
    commands
}

fn project_sections(controller: &Controller, commands: &mut Vec<DisplayCommand>) {
    let navigator = controller.navigator();

    for id in navigator.sections() {
        commands.push(DisplayCommand::SetActive {
            target: Target::Section(id.clone()),
            active: navigator.is_active(id),
        });
    }
    for index in 0..navigator.nav_len() {
        commands.push(DisplayCommand::SetActive {
            target: Target::NavEntry(index),
            active: navigator.active_nav() == Some(index),
        });
    }
    commands.push(DisplayCommand::SetActive {
        target: Target::PrintsIndicator,
        active: navigator.is_prints_active(),
    });
    commands.push(DisplayCommand::SetVisible {
        target: Target::SubNavBar,
        visible: controller.sub_nav_visible(),
    });
}

fn project_gallery(controller: &Controller, commands: &mut Vec<DisplayCommand>) {
    let board = controller.gallery();
    for group in board.groups() {
        commands.push(DisplayCommand::SetActive {
            target: Target::GalleryGroup(group.id.clone()),
            active: board.is_expanded(&group.id),
        });
        for index in 0..group.items.len() {
            commands.push(DisplayCommand::SetActive {
                target: Target::MiddleItem {
                    group: group.id.clone(),
                    index,
                },
                active: group.selected() == Some(index),
            });
        }
        // groups never selected keep the image from the markup
        if let Some(src) = group.viewer_source() {
            commands.push(DisplayCommand::SetImageSource {
                target: Target::Viewer(group.id.clone()),
                src: src.to_string(),
            });
        }
    }
}

fn project_lightbox(controller: &Controller, commands: &mut Vec<DisplayCommand>) {
    let lightbox = controller.lightbox();
    let (src, (prev, next)) = match lightbox.session() {
        Some(session) => (
            session.current().display_source().to_string(),
            session.arrows(),
        ),
        None => (String::new(), (false, false)),
    };
    commands.push(DisplayCommand::SetActive {
        target: Target::LightboxOverlay,
        active: lightbox.is_open(),
    });
    commands.push(DisplayCommand::SetImageSource {
        target: Target::LightboxImage,
        src,
    });
    commands.push(DisplayCommand::SetVisible {
        target: Target::LightboxPrev,
        visible: prev,
    });
    commands.push(DisplayCommand::SetVisible {
        target: Target::LightboxNext,
        visible: next,
    });
}

fn project_unit3(controller: &Controller, commands: &mut Vec<DisplayCommand>) {
    let Some(unit3) = controller.unit3() else {
        return;
    };
    // leave the markup untouched until initialized
    if let Some(visible) = unit3.visible() {
        for panel in unit3.panels() {
            let shown = panel == visible;
            commands.push(DisplayCommand::SetVisible {
                target: Target::Unit3Panel(panel.clone()),
                visible: shown,
            });
            commands.push(DisplayCommand::SetActive {
                target: Target::Unit3Link(panel.clone()),
                active: shown,
            });
        }
    }
    let sticky = unit3.sticky();
    if sticky.created {
        commands.push(DisplayCommand::SetVisible {
            target: Target::StickyNav,
            visible: sticky.shown,
        });
    }
    commands.push(DisplayCommand::SetActive {
        target: Target::StickyPadding,
        active: sticky.shown,
    });
}

/// Active state of an element within a command list (tests and terminal rendering)
pub fn is_active(commands: &[DisplayCommand], target: &Target) -> Option<bool> {
    commands.iter().find_map(|c| match c {
        DisplayCommand::SetActive { target: t, active } if t == target => Some(*active),
        _ => None,
    })
}

/// Visibility of an element within a command list
pub fn is_visible(commands: &[DisplayCommand], target: &Target) -> Option<bool> {
    commands.iter().find_map(|c| match c {
        DisplayCommand::SetVisible { target: t, visible } if t == target => Some(*visible),
        _ => None,
    })
}

/// Image source of an element within a command list
pub fn image_source<'a>(commands: &'a [DisplayCommand], target: &Target) -> Option<&'a str> {
    commands.iter().find_map(|c| match c {
        DisplayCommand::SetImageSource { target: t, src } if t == target => Some(src.as_str()),
        _ => None,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::{loaded_context, sid};
    use crate::types::ImageRef;

    fn active_sections(commands: &[DisplayCommand]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                DisplayCommand::SetActive {
                    target: Target::Section(id),
                    active: true,
                } => Some(id.to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn exactly_one_section_is_projected_active() {
        let mut ctx = loaded_context();
        assert_eq!(active_sections(&project(&ctx.controller)), vec!["landing"]);
        ctx.controller.nav_clicked(0);
        ctx.controller.unit_thumbnail_clicked(&sid("sectionB"));
        assert_eq!(active_sections(&project(&ctx.controller)), vec!["sectionB"]);
    }

    #[test]
    fn projection_is_deterministic() {
        let mut ctx = loaded_context();
        ctx.controller.select_middle("group-characters", 1);
        assert_eq!(project(&ctx.controller), project(&ctx.controller));
    }

    #[test]
    fn viewer_source_only_after_selection() {
        let mut ctx = loaded_context();
        let viewer = Target::Viewer("group-characters".to_string());
        assert_eq!(image_source(&project(&ctx.controller), &viewer), None);

        ctx.controller.select_middle("group-characters", 1);
        let commands = project(&ctx.controller);
        assert_eq!(
            image_source(&commands, &viewer),
            Some("img/chars/lantern.jpg")
        );
        assert_eq!(
            is_active(
                &commands,
                &Target::GalleryGroup("group-characters".to_string())
            ),
            Some(true)
        );
        assert_eq!(
            is_active(
                &commands,
                &Target::GalleryGroup("group-sketchbook".to_string())
            ),
            Some(false)
        );
    }

    #[test]
    fn closed_lightbox_clears_image_and_arrows() {
        let ctx = loaded_context();
        let commands = project(&ctx.controller);
        assert_eq!(is_active(&commands, &Target::LightboxOverlay), Some(false));
        assert_eq!(image_source(&commands, &Target::LightboxImage), Some(""));
        assert_eq!(is_visible(&commands, &Target::LightboxPrev), Some(false));
        assert_eq!(is_visible(&commands, &Target::LightboxNext), Some(false));
    }

    #[test]
    fn lightbox_arrows_hide_at_ends() {
        let mut ctx = loaded_context();
        let set = ctx.controller.config().image_set("prints-gallery").unwrap();
        let first = set.images[0].clone();
        ctx.controller.open_lightbox(Some("prints-gallery"), 0, &first);
        let commands = project(&ctx.controller);
        assert_eq!(is_visible(&commands, &Target::LightboxPrev), Some(false));
        assert_eq!(is_visible(&commands, &Target::LightboxNext), Some(true));
        assert_eq!(
            image_source(&commands, &Target::LightboxImage),
            Some("img/prints/zine-cover.jpg")
        );
    }

    #[test]
    fn lightbox_falls_back_to_thumbnail_source() {
        let mut ctx = loaded_context();
        let image = ImageRef::new("img/s2/02-s.jpg");
        ctx.controller.open_lightbox(Some("series-2-gallery"), 1, &image);
        let commands = project(&ctx.controller);
        assert_eq!(
            image_source(&commands, &Target::LightboxImage),
            Some("img/s2/02-s.jpg")
        );
    }

    #[test]
    fn sticky_nav_projected_only_once_created() {
        let mut ctx = loaded_context();
        let commands = project(&ctx.controller);
        assert_eq!(is_visible(&commands, &Target::StickyNav), None);
        assert_eq!(is_active(&commands, &Target::StickyPadding), Some(false));

        ctx.controller.hub_link_clicked(&sid("Unit1"), None);
        let commands = project(&ctx.controller);
        assert_eq!(is_visible(&commands, &Target::StickyNav), Some(true));
        assert_eq!(is_active(&commands, &Target::StickyPadding), Some(true));
    }

    #[test]
    fn unit3_panel_and_link_follow_visible_panel() {
        let mut ctx = loaded_context();
        ctx.controller.unit3_link_clicked("u3-Research");
        let commands = project(&ctx.controller);
        assert_eq!(
            is_visible(&commands, &Target::Unit3Panel("u3-Research".to_string())),
            Some(true)
        );
        assert_eq!(
            is_visible(&commands, &Target::Unit3Panel("u3-Brief".to_string())),
            Some(false)
        );
        assert_eq!(
            is_active(&commands, &Target::Unit3Link("u3-Research".to_string())),
            Some(true)
        );
    }
}
