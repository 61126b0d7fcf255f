//! Browser smoke tests for the host bindings
//!
//! Run with `wasm-pack test --headless --firefox -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use compose_host::{ContainerDom, HostPage, WebContainerDom};
use compose_ipc::{CssDeclarations, FrameId, Selector, TabId};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn open_builds_container_and_close_removes_it() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let dom = WebContainerDom::new(doc.clone(), doc.body().unwrap().into());
    let mut page = HostPage::new(TabId::new("1"), dom);
    let id = FrameId::new("web_1");

    page.open_compose(id.clone()).unwrap();
    let chrome = doc
        .query_selector(Selector::window_chrome(&id).as_str())
        .unwrap()
        .unwrap();
    assert_eq!(chrome.get_attribute("data-order").as_deref(), Some("1"));
    assert!(chrome.class_list().contains("active"));

    page.dom_mut()
        .set_css(&Selector::iframe(&id), &CssDeclarations::height(Some(300.0)));
    let iframe = doc.query_selector("iframe#web_1").unwrap().unwrap();
    assert!(iframe
        .get_attribute("style")
        .unwrap_or_default()
        .contains("300px"));

    page.close_compose(&id).unwrap();
    assert!(doc
        .query_selector(Selector::window_chrome(&id).as_str())
        .unwrap()
        .is_none());
}
