#![cfg(target_arch = "wasm32")]

use std::sync::Arc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlSelectElement};
use yew::prelude::*;
use yew::Renderer;

use nusantara_web::app::{self, App, overlay, render, state};
use nusantara_web::atlas::constants::RENDER_TRANSITION_MS;
use nusantara_web::atlas::{AtlasAction, Database};
use nusantara_web::{dom, input};

const SHIPPED: &str = include_str!("../static/assets/data/provinsi.json");

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    // Let the first render and its effects flush.
    dom::sleep_ms(0).await.expect("timer");
}

#[wasm_bindgen_test]
async fn selector_and_loading_indicator_mount() {
    render_app().await;
    let doc = dom::document().expect("document");
    let select: HtmlSelectElement = doc
        .get_element_by_id("provinceSelect")
        .expect("province select")
        .dyn_into()
        .expect("cast to select");
    assert_eq!(select.tag_name(), "SELECT");
    let main = doc.get_element_by_id("main").expect("main landmark");
    assert_eq!(main.get_attribute("role").unwrap_or_default(), "main");
    assert!(doc.get_element_by_id("loading").is_some());
}

#[wasm_bindgen_test]
async fn escape_listener_installs_once() {
    render_app().await;
    assert!(input::escape_listener_registered());
    assert!(!input::register_escape_listener());
    render_app().await;
    assert!(input::escape_listener_registered());
}

/// The app with the shipped document handed in directly instead of fetched.
#[function_component(Preloaded)]
fn preloaded() -> Html {
    let page = state::use_page_state();
    render::use_render_commit(&page);
    overlay::use_overlay_lifecycle(&page);
    let dispatcher = page.dispatcher();
    use_effect_with((), move |()| {
        let database = Database::from_json(SHIPPED).expect("shipped data parses");
        dispatcher.dispatch(AtlasAction::Loaded(Arc::new(database)));
        || {}
    });
    app::page_view(&page)
}

async fn settle(ms: i32) {
    dom::sleep_ms(ms).await.expect("timer");
}

async fn mount_preloaded() {
    Renderer::<Preloaded>::with_root(ensure_app_root()).render();
    settle(RENDER_TRANSITION_MS + 100).await;
}

fn element(selector: &str) -> Option<HtmlElement> {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn overlay_shown() -> bool {
    element("#speciesModal").is_some()
}

async fn open_first_flora_tile() {
    element("#floraOthers .others-item")
        .expect("flora tile rendered")
        .click();
    settle(20).await;
}

#[wasm_bindgen_test]
async fn escape_closes_open_overlay_and_restores_scroll() {
    mount_preloaded().await;
    assert!(!overlay_shown());

    open_first_flora_tile().await;
    assert!(overlay_shown());
    assert!(dom::scroll_locked());
    let title = element("#modalTitle").expect("modal title");
    assert_eq!(title.text_content().unwrap_or_default(), "Bunga Bangkai");

    assert!(input::dispatch_escape());
    settle(20).await;
    assert!(!overlay_shown());
    assert!(!dom::scroll_locked());
}

#[wasm_bindgen_test]
async fn only_backdrop_clicks_dismiss_overlay() {
    mount_preloaded().await;
    open_first_flora_tile().await;
    assert!(overlay_shown());

    element(".modal-content").expect("modal box").click();
    settle(20).await;
    assert!(overlay_shown(), "clicks inside the box must not close it");
    assert!(dom::scroll_locked());

    element("#speciesModal").expect("backdrop").click();
    settle(20).await;
    assert!(!overlay_shown());
    assert!(!dom::scroll_locked());
}

#[wasm_bindgen_test]
async fn close_button_dismisses_overlay() {
    mount_preloaded().await;
    open_first_flora_tile().await;
    element(".modal-close").expect("close button").click();
    settle(20).await;
    assert!(!overlay_shown());
    assert!(!dom::scroll_locked());
}

#[wasm_bindgen_test]
fn scroll_lock_toggles_body_overflow() {
    dom::set_scroll_locked(true);
    assert!(dom::scroll_locked());
    dom::set_scroll_locked(false);
    assert!(!dom::scroll_locked());
}
