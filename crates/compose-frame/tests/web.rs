//! Browser smoke tests for the frame bindings
//!
//! Run with `wasm-pack test --headless --firefox -- --features wasm`.

#![cfg(all(target_arch = "wasm32", feature = "wasm"))]

use compose_frame::{FrameDom, FrameElement, WebFrameDom};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn missing_elements_measure_nothing() {
    let dom = WebFrameDom::from_window().unwrap();
    assert!(!dom.is_visible(FrameElement::ComposeTable));
    assert_eq!(dom.outer_height(FrameElement::ComposeTable), None);
    assert_eq!(dom.vertical_padding(FrameElement::TripleDot), 0.0);
}

#[wasm_bindgen_test]
fn styles_and_classes_reach_the_document() {
    let doc = document();
    let input = doc
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    input.set_id("input_text");
    doc.body().unwrap().append_child(&input).unwrap();

    let mut dom = WebFrameDom::from_window().unwrap();
    dom.set_style(FrameElement::InputText, "max-width", "512px");
    assert_eq!(
        input.style().get_property_value("max-width").unwrap(),
        "512px"
    );
    dom.set_style(FrameElement::InputText, "max-width", "");
    assert_eq!(input.style().get_property_value("max-width").unwrap(), "");

    dom.add_class(FrameElement::InputText, "x");
    assert!(dom.has_class(FrameElement::InputText, "x"));
    input.remove();
}
