#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use portfolio_core::types::ThumbnailKind;
use portfolio_core::SectionId;
use portfolio_web::{bindings, dom};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r##"
<a class="title-link" href="#">Portfolio</a>
<ul id="navList">
  <li data-target="Unit1">Unit 1</li>
  <li data-target="missing">Broken</li>
  <li data-target="Unit3">Unit 3</li>
  <li data-target="illustration">Illustration</li>
</ul>
<div id="printsNav"></div>
<div id="subNavButtons"><button id="btnBackSub"></button><button id="btnNextSub"></button></div>
<main class="main-content">
  <section id="landing" class="page-section active"><h1>Landing</h1></section>
  <section id="Unit1" class="page-section">
    <div id="unitGallery">
      <figure data-target="sectionA"><figcaption>A</figcaption></figure>
      <figure data-target="sectionB"><figcaption>B</figcaption></figure>
    </div>
  </section>
  <section id="sectionA" class="page-section"><div class="image-block"><img src="a1.jpg" data-full="a1-full.jpg"><img src="a2.jpg"></div></section>
  <section id="sectionB" class="page-section"></section>
  <section id="illustration" class="page-section">
    <div id="illus-series-gallery" class="gallery">
      <img src="s1.jpg" data-target="Gallery-series-1" alt="Series 1">
    </div>
    <div class="top-item" data-target="group-a">Sketchbook</div>
    <div id="group-a" class="gallery-group">
      <div class="middle-item" data-index="0" data-full="big-0.jpg"><img src="mid-0.jpg" alt="Harbour"></div>
      <div class="middle-item" data-index="1" data-full="big-1.jpg"><img src="mid-1.jpg" alt="Stairwell"></div>
      <div class="gallery-bottom-row"><img class="viewer-large" src=""></div>
    </div>
  </section>
  <section id="Gallery-series-1" class="page-section"></section>
  <section id="Unit3" class="page-section">
    <nav class="u3-subnav">
      <a class="u3-subnav__link" href="#u3-Brief">Brief</a>
      <a class="u3-subnav__link" href="#u3-Gallery">Gallery Hub</a>
    </nav>
    <div id="u3-Brief"></div>
    <div id="u3-Gallery">
      <a href="#" data-target="Unit1">Unit 1</a>
      <a href="#" data-target="sectionA" data-scroll="#sectionA .image-block">A</a>
    </div>
  </section>
</main>
<div id="lightboxOverlay"><img id="lightboxImg"><button id="lightboxClose"></button><button id="lightboxPrev"></button><button id="lightboxNext"></button></div>
"##;

fn document() -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().set_inner_html(FIXTURE);
    document
}

fn click(document: &Document, selector: &str) {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn has_class(document: &Document, id: &str, class: &str) -> bool {
    document
        .get_element_by_id(id)
        .unwrap()
        .class_list()
        .contains(class)
}

#[wasm_bindgen_test]
fn scan_reads_site_structure() {
    let document = document();
    let page = dom::scan(&document).unwrap();
    let config = &page.config;

    assert_eq!(config.sections.len(), 7);
    assert_eq!(config.initial(), &SectionId::new("landing"));
    // sidebar entries pointing at unknown sections are dropped; elements stay aligned with the config
    assert_eq!(config.nav.len(), 3);
    assert_eq!(page.nav_items.len(), 3);
    assert_eq!(config.prints, None);

    let unit: Vec<_> = config
        .thumbnails
        .iter()
        .filter(|t| t.kind == ThumbnailKind::Unit)
        .collect();
    assert_eq!(unit.len(), 2);
    assert!(config
        .thumbnails
        .iter()
        .any(|t| t.kind == ThumbnailKind::Series && t.target == "Gallery-series-1"));

    let group = &config.galleries[0];
    assert_eq!(group.id, "group-a");
    assert_eq!(group.label, "Sketchbook");
    assert_eq!(group.items[1].full.as_deref(), Some("big-1.jpg"));

    let block = config
        .image_sets
        .iter()
        .find(|s| s.section == Some(SectionId::new("sectionA")))
        .unwrap();
    assert_eq!(block.images.len(), 2);
    assert_eq!(block.images[0].display_source(), "a1-full.jpg");
    assert_eq!(block.images[1].display_source(), "a2.jpg");

    let unit3 = config.unit3.as_ref().unwrap();
    assert_eq!(unit3.panels.len(), 2);
    assert_eq!(unit3.hub[1].scroll.as_deref(), Some("#sectionA .image-block"));

    // arrow buttons filled in
    assert!(document.query_selector("#group-a .viewer-prev").unwrap().is_some());
    assert!(document.query_selector("#group-a .viewer-next").unwrap().is_some());
}

#[wasm_bindgen_test]
fn mounted_page_follows_clicks() {
    let document = document();
    let window = web_sys::window().unwrap();
    bindings::mount(&window, &document).unwrap();

    click(&document, "#navList li[data-target='Unit1']");
    assert!(has_class(&document, "Unit1", "active"));
    assert!(!has_class(&document, "landing", "active"));

    click(&document, "#unitGallery figure[data-target='sectionB']");
    assert!(has_class(&document, "sectionB", "active"));
    assert!(!has_class(&document, "Unit1", "active"));

    click(&document, "#sectionA .image-block img");
    assert!(has_class(&document, "lightboxOverlay", "active"));
    assert_eq!(
        document
            .get_element_by_id("lightboxImg")
            .unwrap()
            .get_attribute("src")
            .as_deref(),
        Some("a1-full.jpg")
    );
    assert!(has_class(&document, "lightboxPrev", "hidden"));
    assert!(!has_class(&document, "lightboxNext", "hidden"));

    click(&document, "#lightboxClose");
    assert!(!has_class(&document, "lightboxOverlay", "active"));

    click(&document, "#u3-Gallery [data-target='Unit1']");
    assert!(document.get_element_by_id("u3StickyNav").is_some());
    assert!(document.body().unwrap().class_list().contains("u3-sticky-padding"));

    click(&document, "#u3StickyNav .u3-subnav__link[href='#u3-Gallery']");
    assert!(has_class(&document, "Unit3", "active"));
    assert!(!document.body().unwrap().class_list().contains("u3-sticky-padding"));

    let projection = portfolio_web::current_projection().unwrap();
    assert!(projection.contains("setActive"));
}

const REPEATED_FIXTURE: &str = r##"
<ul id="navList"><li data-target="landing">Landing</li></ul>
<main class="main-content">
  <section id="landing" class="page-section active">
    <div id="repeat-gallery" class="gallery">
      <img src="a.jpg"><img src="b.jpg"><img src="a.jpg"><img src="c.jpg">
    </div>
  </section>
</main>
<div id="lightboxOverlay"><img id="lightboxImg"><button id="lightboxClose"></button><button id="lightboxPrev"></button><button id="lightboxNext"></button></div>
"##;

#[wasm_bindgen_test]
fn repeated_image_opens_at_clicked_copy() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    document.body().unwrap().set_inner_html(REPEATED_FIXTURE);
    bindings::mount(&window, &document).unwrap();

    let gallery = document.get_element_by_id("repeat-gallery").unwrap();
    let third = dom::query_all(&gallery, "img").into_iter().nth(2).unwrap();
    assert_eq!(dom::ordinal_in(&gallery, &third), Some(2));

    third.dyn_into::<HtmlElement>().unwrap().click();
    let index = bindings::with_controller(|c| c.lightbox().session().map(|s| s.index()));
    assert_eq!(index, Some(Some(2)));
    assert!(!has_class(&document, "lightboxPrev", "hidden"));
    assert!(!has_class(&document, "lightboxNext", "hidden"));
}
