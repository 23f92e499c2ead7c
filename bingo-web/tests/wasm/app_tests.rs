use wasm_bindgen_test::*;
use yew::Renderer;

use bingo_web::app::App;
use bingo_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        let _ = root.set_inner_html("");
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

#[wasm_bindgen_test]
fn app_mounts_a_full_default_grid() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    let doc = dom::document();
    let cells = doc
        .query_selector_all("[role='gridcell']")
        .expect("query grid cells");
    assert_eq!(cells.length(), 25);
}

#[wasm_bindgen_test]
fn toolbar_offers_the_sync_actions() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    let doc = dom::document();
    let body_text = doc
        .body()
        .map(|body| body.inner_html())
        .unwrap_or_default();
    assert!(body_text.contains("Find board"));
    assert!(body_text.contains("Save as template"));
}
