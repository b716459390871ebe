//! Page markup scan
//!
//! At startup the Sections, sidebar, galleries and Unit-3 structure on the page
//! are read into one `SiteConfig`; afterwards the controller only queries that
//! table. Image sets without an id get a `data-set-id`, and gallery groups
//! missing their arrow buttons get `.viewer-prev` / `.viewer-next`.

use std::collections::HashSet;

use portfolio_core::types::{
    retain_known_members, GalleryGroupConfig, HubLink, ImageRef, ImageSetConfig,
    MiddleItemConfig, NavEntry, PanelConfig, SectionConfig, ThumbnailKind, ThumbnailLink,
    Unit3Config,
};
use portfolio_core::{CoreResult, SectionId, SiteConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, NodeList};

pub const SECTION: &str = ".page-section";
pub const NAV_ITEMS: &str = "#navList li";
pub const IMAGE_CONTAINERS: &str = ".gallery, .p-gallery, .image-block";
pub const CONTAINER_IMAGES: &str = ".gallery img, .p-gallery img, .image-block img";
pub const UNIT_THUMBNAILS: &str = "#unitGallery figure[data-target]";
pub const SERIES_THUMBNAILS: &str = "#illus-series-gallery img[data-target]";
pub const GALLERY_GROUP: &str = ".gallery-group";
pub const UNIT3_LINKS: &str = "#Unit3 .u3-subnav__link";
pub const HUB_LINKS: &str = "#u3-Gallery [data-target]";
pub const SET_ID_ATTR: &str = "data-set-id";

const UNIT3_SECTION: &str = "Unit3";
const PREV_SVG: &str = r#"<svg viewBox="0 0 24 24" width="22" height="22" aria-hidden="true"><path d="M15 4 L7 12 L15 20" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;
const NEXT_SVG: &str = r#"<svg viewBox="0 0 24 24" width="22" height="22" aria-hidden="true"><path d="M9 4 L17 12 L9 20" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// Scan result
pub struct ScannedPage {
    pub config: SiteConfig,
    /// Sidebar elements, one per `config.nav` entry
    pub nav_items: Vec<Element>,
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements under `root` matching `selector`
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// `query_all` over the whole document
pub fn query_document(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn text_of(el: &Element) -> String {
    el.text_content()
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

fn section_of(el: &Element) -> Option<SectionId> {
    el.closest(SECTION)
        .ok()
        .flatten()
        .map(|s| SectionId::new(s.id()))
        .filter(|id| !id.as_str().is_empty())
}

/// Image reference for an `<img>` on the page
///
/// Uses the raw `src` attribute rather than the resolved absolute URL so that
/// scanned sets and click triggers compare equal.
pub fn image_ref(img: &Element) -> Option<ImageRef> {
    let src = img.get_attribute("src")?;
    let mut image = ImageRef::new(src);
    image.full = img.get_attribute("data-full").filter(|f| !f.is_empty());
    Some(image)
}

/// Images of a container that become lightbox entries, in document order
pub fn set_images(container: &Element) -> Vec<Element> {
    query_all(container, "img")
        .into_iter()
        .filter(|img| img.has_attribute("src"))
        .collect()
}

/// Position of `img` among its container's lightbox entries
pub fn ordinal_in(container: &Element, img: &Element) -> Option<usize> {
    set_images(container).iter().position(|candidate| candidate == img)
}

/// Image set id: the container's own id, otherwise built from its Section and ordinal
pub(crate) fn synthesize_set_id(own: &str, section: Option<&str>, ordinal: usize) -> String {
    if !own.is_empty() {
        return own.to_string();
    }
    format!("{}-set-{ordinal}", section.unwrap_or("page"))
}

/// Image set id of a container (always present after the scan)
pub fn set_id_of(container: &Element) -> Option<String> {
    container.get_attribute(SET_ID_ATTR)
}

/// Falls back to the position in the group when `data-index` does not parse
pub(crate) fn parse_index(raw: Option<&str>, position: usize) -> usize {
    raw.and_then(|r| r.trim().parse().ok()).unwrap_or(position)
}

/// Scan the whole document
pub fn scan(document: &Document) -> CoreResult<ScannedPage> {
    ensure_viewer_buttons(document);

    let sections: Vec<SectionConfig> = query_document(document, SECTION)
        .iter()
        .filter(|el| !el.id().is_empty())
        .map(|el| SectionConfig {
            id: SectionId::new(el.id()),
            title: el
                .query_selector("h1, h2")
                .ok()
                .flatten()
                .map(|h| text_of(&h))
                .unwrap_or_default(),
        })
        .collect();
    let known: HashSet<SectionId> = sections.iter().map(|s| s.id.clone()).collect();

    let mut nav = Vec::new();
    let mut nav_items = Vec::new();
    for item in query_document(document, NAV_ITEMS) {
        let Some(target) = item.get_attribute("data-target").map(SectionId::new) else {
            continue;
        };
        if !known.contains(&target) {
            log::warn!("Sidebar entry points at unknown section: {target}");
            continue;
        }
        nav.push(NavEntry {
            target,
            label: text_of(&item),
        });
        nav_items.push(item);
    }

    let initial_section = document
        .query_selector(&format!("{SECTION}.active"))
        .ok()
        .flatten()
        .map(|el| SectionId::new(el.id()))
        .filter(|id| known.contains(id));

    let landing = SectionId::new("landing");
    let landing = if known.contains(&landing) {
        landing
    } else {
        sections.first().map(|s| s.id.clone()).unwrap_or(landing)
    };
    let prints = Some(SectionId::new("prints-zine")).filter(|p| known.contains(p));

    let config = SiteConfig {
        sub_groups: retain_known_members(SiteConfig::default_sub_groups(), &known),
        galleries: scan_galleries(document),
        image_sets: scan_image_sets(document),
        thumbnails: scan_thumbnails(document, &known),
        unit3: scan_unit3(document, &known),
        sections,
        nav,
        landing,
        prints,
        initial_section,
    };
    config.validate()?;

    log::info!(
        "Page scanned: {} sections, {} nav entries, {} gallery groups, {} image sets",
        config.sections.len(),
        config.nav.len(),
        config.galleries.len(),
        config.image_sets.len()
    );
    Ok(ScannedPage { config, nav_items })
}

fn scan_galleries(document: &Document) -> Vec<GalleryGroupConfig> {
    query_document(document, GALLERY_GROUP)
        .iter()
        .filter(|group| !group.id().is_empty())
        .map(|group| {
            let id = group.id();
            let label = document
                .query_selector(&format!(".top-item[data-target=\"{id}\"]"))
                .ok()
                .flatten()
                .map(|top| text_of(&top))
                .unwrap_or_default();
            let items = query_all(group, ".middle-item")
                .iter()
                .map(|item| {
                    let img = item.query_selector("img").ok().flatten();
                    MiddleItemConfig {
                        label: img
                            .as_ref()
                            .and_then(|i| i.get_attribute("alt"))
                            .filter(|alt| !alt.is_empty())
                            .unwrap_or_else(|| text_of(item)),
                        thumb: img
                            .and_then(|i| i.get_attribute("src"))
                            .unwrap_or_default(),
                        full: item.get_attribute("data-full").filter(|f| !f.is_empty()),
                    }
                })
                .collect();
            GalleryGroupConfig {
                section: section_of(group),
                id,
                label,
                items,
            }
        })
        .collect()
}

fn scan_image_sets(document: &Document) -> Vec<ImageSetConfig> {
    let mut seen = HashSet::new();
    query_document(document, IMAGE_CONTAINERS)
        .iter()
        .enumerate()
        .map(|(ordinal, container)| {
            let section = section_of(container);
            let section_name = section.as_ref().map(SectionId::as_str);
            let mut id = synthesize_set_id(&container.id(), section_name, ordinal);
            // markup occasionally repeats an id
            if !seen.insert(id.clone()) {
                id = synthesize_set_id("", section_name, ordinal);
                seen.insert(id.clone());
            }
            if let Err(e) = container.set_attribute(SET_ID_ATTR, &id) {
                log::debug!("Cannot tag image set {id}: {e:?}");
            }
            ImageSetConfig {
                images: set_images(container).iter().filter_map(image_ref).collect(),
                id,
                section,
            }
        })
        .collect()
}

fn scan_thumbnails(document: &Document, known: &HashSet<SectionId>) -> Vec<ThumbnailLink> {
    let kinds = [
        (UNIT_THUMBNAILS, ThumbnailKind::Unit),
        (SERIES_THUMBNAILS, ThumbnailKind::Series),
    ];
    kinds
        .iter()
        .flat_map(|(selector, kind)| {
            query_document(document, selector)
                .into_iter()
                .map(move |el| (el, *kind))
        })
        .filter_map(|(el, kind)| {
            let target = SectionId::new(el.get_attribute("data-target")?);
            if !known.contains(&target) {
                log::warn!("Thumbnail points at unknown section: {target}");
                return None;
            }
            let label = el
                .get_attribute("alt")
                .filter(|alt| !alt.is_empty())
                .unwrap_or_else(|| text_of(&el));
            Some(ThumbnailLink {
                section: section_of(&el),
                target,
                kind,
                label,
            })
        })
        .collect()
}

fn scan_unit3(document: &Document, known: &HashSet<SectionId>) -> Option<Unit3Config> {
    let unit3 = document.get_element_by_id(UNIT3_SECTION)?;
    let links = query_all(&unit3, ".u3-subnav__link");
    let panels: Vec<PanelConfig> = query_all(&unit3, "div[id^=\"u3-\"]")
        .iter()
        .map(|panel| {
            let id = panel.id();
            let label = links
                .iter()
                .find(|a| panel_of_link(a).as_deref() == Some(id.as_str()))
                .map(text_of)
                .unwrap_or_else(|| id.clone());
            PanelConfig { id, label }
        })
        .collect();
    if links.is_empty() || panels.is_empty() {
        log::debug!("Unit-3 has no sub-navigation or panels, skipping");
        return None;
    }

    let hub = query_document(document, HUB_LINKS)
        .iter()
        .filter_map(|el| {
            let target = SectionId::new(el.get_attribute("data-target")?);
            known.contains(&target).then(|| HubLink {
                scroll: el.get_attribute("data-scroll").filter(|s| !s.is_empty()),
                label: el
                    .get_attribute("alt")
                    .filter(|alt| !alt.is_empty())
                    .unwrap_or_else(|| text_of(el)),
                target,
            })
        })
        .collect();

    Some(Unit3Config {
        section: SectionId::new(UNIT3_SECTION),
        panels,
        hub,
    })
}

/// Panel id a sub-navigation link points at (`href="#u3-xxx"`)
pub fn panel_of_link(link: &Element) -> Option<String> {
    let href = link.get_attribute("href")?;
    crate::history::strip_hash(&href).map(str::to_string)
}

/// Add missing arrow buttons to gallery groups and give all of them SVG arrows
fn ensure_viewer_buttons(document: &Document) {
    for row in query_document(document, ".gallery-group .gallery-bottom-row") {
        for (class, label, svg) in [
            ("viewer-prev", "Previous", PREV_SVG),
            ("viewer-next", "Next", NEXT_SVG),
        ] {
            let button = match row.query_selector(&format!(".{class}")).ok().flatten() {
                Some(existing) => existing,
                None => match create_button(document, &row, class, label) {
                    Some(created) => created,
                    None => continue,
                },
            };
            button.set_inner_html(svg);
        }
    }
}

fn create_button(document: &Document, row: &Element, class: &str, label: &str) -> Option<Element> {
    let button = document.create_element("button").ok()?;
    button.set_class_name(class);
    button.set_attribute("aria-label", label).ok()?;
    row.append_child(&button).ok()?;
    Some(button)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_id_prefers_own_id() {
        assert_eq!(
            synthesize_set_id("prints-gallery", Some("prints-zine"), 3),
            "prints-gallery"
        );
        assert_eq!(synthesize_set_id("", Some("sectionB"), 2), "sectionB-set-2");
        assert_eq!(synthesize_set_id("", None, 0), "page-set-0");
    }

    #[test]
    fn index_falls_back_to_position() {
        assert_eq!(parse_index(Some("2"), 0), 2);
        assert_eq!(parse_index(Some(" 4 "), 0), 4);
        assert_eq!(parse_index(Some("abc"), 1), 1);
        assert_eq!(parse_index(None, 5), 5);
    }
}
