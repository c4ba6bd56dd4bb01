use futures::executor::block_on;
use nusantara_web::app::view::{AtlasPage, AtlasPageProps};
use nusantara_web::atlas::{AtlasAction, AtlasState, Category, Database, OverlayTarget};
use std::sync::Arc;
use yew::{Callback, LocalServerRenderer};

const SHIPPED: &str = include_str!("../static/assets/data/provinsi.json");

fn render(state: AtlasState) -> String {
    let props = AtlasPageProps {
        state,
        on_select: Callback::noop(),
        on_open: Callback::noop(),
        on_close: Callback::noop(),
    };
    block_on(LocalServerRenderer::<AtlasPage>::with_props(props).render())
}

fn slot_text<'a>(html: &'a str, id: &str) -> &'a str {
    let marker = format!("id=\"{id}\"");
    let start = html.find(&marker).expect("slot present") + marker.len();
    let rest = &html[start..];
    &rest[..rest.find("</").unwrap_or(rest.len())]
}

fn content_section(html: &str) -> &str {
    let start = html.find("id=\"content\"").expect("content present");
    let end = html.find("<footer").unwrap_or(html.len());
    &html[start..end]
}

fn settled() -> AtlasState {
    let db = Arc::new(Database::from_json(SHIPPED).unwrap());
    let state = AtlasState::new().apply(AtlasAction::Loaded(db));
    let token = state.pending_render().unwrap();
    state.apply(AtlasAction::Commit(token))
}

#[test]
fn unloaded_page_shows_loading_only() {
    let html = render(AtlasState::new());
    assert!(html.contains("loading active"));
    assert!(html.contains("opacity: 0"));
    assert!(!html.contains("floraName"));
    assert!(!html.contains("<option"));
}

#[test]
fn loaded_page_renders_default_province() {
    let html = render(settled());
    assert!(!html.contains("loading active"));
    assert!(html.contains("opacity: 1"));
    assert!(html.contains("Bunga Jeumpa"));
    assert!(html.contains("Cempala Kuneng"));
    assert!(html.contains("badge badge-safe"));
    // "Hampir Terancam" hits the danger tier before the warning tier.
    assert!(html.contains("badge badge-danger"));
    // Tile label for "Bunga Bangkai (Rentan)" drops the status.
    assert!(html.contains("Bunga Bangkai"));
    assert!(!html.contains("Bunga Bangkai (Rentan)"));
    assert!(html.contains("Rafflesia Aceh"));
}

#[test]
fn absent_optional_fields_show_placeholder() {
    let aceh = render(settled());
    assert!(slot_text(&aceh, "f_alias").contains("Cempaka Kuning"));

    let state = settled().apply(AtlasAction::Select("Jawa Barat".into()));
    let token = state.pending_render().unwrap();
    let jabar = render(state.apply(AtlasAction::Commit(token)));
    assert!(jabar.contains("Gandaria"));
    assert_eq!(slot_text(&jabar, "f_alias"), ">-");
    assert_eq!(slot_text(&jabar, "a_alias"), ">-");
}

#[test]
fn selector_lists_every_province_sorted() {
    let html = render(settled());
    let db = Database::from_json(SHIPPED).unwrap();
    let mut last = 0;
    for name in db.province_names() {
        let pos = html
            .find(&format!(">{name}<"))
            .unwrap_or_else(|| panic!("{name} option missing"));
        assert!(pos >= last, "{name} out of order");
        last = pos;
    }
}

#[test]
fn busy_render_keeps_previous_content_faded() {
    let state = settled().apply(AtlasAction::Select("Bali".into()));
    assert!(state.is_busy());
    let html = render(state);
    assert!(html.contains("loading active"));
    assert!(html.contains("opacity: 0"));
    assert!(html.contains("Bunga Jeumpa"));
    assert!(!html.contains("Jalak Bali"));
}

#[test]
fn absent_province_selection_leaves_page_unchanged() {
    let before = render(settled());
    let after = render(settled().apply(AtlasAction::Select("Atlantis".into())));
    assert!(!after.contains("loading active"));
    assert_eq!(content_section(&before), content_section(&after));
    assert!(content_section(&after).contains("Bunga Jeumpa"));
}

#[test]
fn open_detail_renders_overlay() {
    let state = settled().apply(AtlasAction::OpenDetail(OverlayTarget {
        index: 0,
        category: Category::Fauna,
    }));
    let html = render(state);
    assert!(html.contains("speciesModal"));
    assert!(html.contains("Harimau Sumatera"));
    assert!(html.contains("modal-status danger"));
    assert!(html.contains("Perburuan, deforestasi, dan perubahan habitat"));

    let closed = render(settled().apply(AtlasAction::CloseDetail));
    assert!(!closed.contains("speciesModal"));
}
