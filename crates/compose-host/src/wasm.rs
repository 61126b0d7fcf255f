//! WASM bindings for the host page
//!
//! Provides [`WebContainerDom`] over the live document and the `ComposeHost`
//! class exported to the extension's content script. Frames' `postMessage`
//! payloads are handed to `applyMessage` as JSON strings.

use compose_ipc::selector::{FRAME_ID_ATTRIBUTE, WINDOW_CHROME_CLASS};
use compose_ipc::{CssDeclarations, Envelope, FrameId, HostEvent, IpcError, Selector, TabId};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::HostConfig;
use crate::dom::ContainerDom;
use crate::error::HostError;
use crate::page::HostPage;
use crate::registry::OpenOutcome;

/// Class of the capacity toast
const NOTICE_CLASS: &str = "secure_compose_notice";

fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

fn to_js(err: HostError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_frame_id(raw: &str) -> Result<FrameId, JsValue> {
    FrameId::parse(raw).map_err(|e: IpcError| JsValue::from_str(&e.to_string()))
}

/// [`ContainerDom`] over the host document
pub struct WebContainerDom {
    document: Document,
    root: Element,
}

impl WebContainerDom {
    /// Windows are appended under `root`
    pub fn new(document: Document, root: Element) -> Self {
        Self { document, root }
    }

    /// Attach to the first element matching `root_selector` in the current page
    pub fn from_window(root_selector: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let root = document.query_selector(root_selector).ok().flatten()?;
        Some(Self::new(document, root))
    }

    fn matching(&self, selector: &Selector) -> Vec<HtmlElement> {
        let mut found = Vec::new();
        for part in selector.parts() {
            let Ok(list) = self.document.query_selector_all(part.as_str()) else {
                log(&format!("[compose-host] bad selector: {}", part));
                continue;
            };
            found.extend(
                (0..list.length())
                    .filter_map(|i| list.item(i))
                    .filter_map(|node| node.dyn_into::<HtmlElement>().ok()),
            );
        }
        found
    }

    fn create(&self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).ok()
    }
}

impl ContainerDom for WebContainerDom {
    fn insert_window(&mut self, frame_id: &FrameId) {
        let (Some(chrome), Some(iframe)) = (self.create("div"), self.create("iframe")) else {
            log("[compose-host] failed to create window container");
            return;
        };
        let _ = chrome.set_attribute("class", WINDOW_CHROME_CLASS);
        let _ = chrome.set_attribute(FRAME_ID_ATTRIBUTE, frame_id.as_str());
        iframe.set_id(frame_id.as_str());
        let _ = chrome.append_child(&iframe);
        let _ = self.root.append_child(&chrome);
    }

    fn remove_window(&mut self, frame_id: &FrameId) {
        for el in self.matching(&Selector::window_chrome(frame_id)) {
            el.remove();
        }
    }

    fn set_css(&mut self, selector: &Selector, css: &CssDeclarations) {
        for el in self.matching(selector) {
            let style = el.style();
            for (property, value) in css.iter() {
                let _ = if value.is_empty() {
                    style.remove_property(property).map(|_| ())
                } else {
                    style.set_property(property, value)
                };
            }
        }
    }

    fn add_class(&mut self, selector: &Selector, class: &str) {
        for el in self.matching(selector) {
            let _ = el.class_list().add_1(class);
        }
    }

    fn remove_class(&mut self, selector: &Selector, class: &str) {
        for el in self.matching(selector) {
            let _ = el.class_list().remove_1(class);
        }
    }

    fn set_attribute(&mut self, selector: &Selector, name: &str, value: &str) {
        for el in self.matching(selector) {
            let _ = el.set_attribute(name, value);
        }
    }

    fn scroll_to_cursor(&mut self, reply_msg: &Selector, cursor_offset_top: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(viewport_height) = window.inner_height().ok().and_then(|h| h.as_f64()) else {
            return;
        };
        for el in self.matching(reply_msg) {
            let caret = el.get_bounding_client_rect().top() + cursor_offset_top;
            if caret < 0.0 || caret > viewport_height {
                window.scroll_by_with_x_and_y(0.0, caret - viewport_height / 2.0);
            }
        }
    }

    fn show_notice(&mut self, text: &str) {
        for old in self.matching(&Selector::new(format!("div.{}", NOTICE_CLASS))) {
            old.remove();
        }
        let Some(notice) = self.create("div") else {
            return;
        };
        let _ = notice.set_attribute("class", NOTICE_CLASS);
        notice.set_text_content(Some(text));
        if let Some(body) = self.document.body() {
            let _ = body.append_child(&notice);
        }
    }
}

/// Browser handle for the compose windows of one tab
#[wasm_bindgen(js_name = ComposeHost)]
pub struct WasmComposeHost {
    inner: HostPage<WebContainerDom>,
}

#[wasm_bindgen(js_class = ComposeHost)]
impl WasmComposeHost {
    /// Manage windows under the element matching `root_selector`.
    ///
    /// `config_json` may hold a partial `HostConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        tab_id: &str,
        root_selector: &str,
        config_json: Option<String>,
    ) -> Result<WasmComposeHost, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => HostConfig::from_json(&json).map_err(|e| {
                log(&format!("[compose-host] {}", e));
                to_js(e)
            })?,
            None => HostConfig::default(),
        };
        let dom = WebContainerDom::from_window(root_selector)
            .ok_or_else(|| JsValue::from_str("compose window root not found"))?;
        let inner = HostPage::with_config(TabId::new(tab_id), dom, config).map_err(to_js)?;
        Ok(Self { inner })
    }

    /// Open a window whose iframe loads `src`; false when the cap was hit
    #[wasm_bindgen(js_name = openCompose)]
    pub fn open_compose(&mut self, frame_id: &str, src: &str) -> Result<bool, JsValue> {
        let frame_id = parse_frame_id(frame_id)?;
        match self.inner.open_compose(frame_id.clone()).map_err(to_js)? {
            OpenOutcome::Opened { .. } => {
                self.inner
                    .dom_mut()
                    .set_attribute(&Selector::iframe(&frame_id), "src", src);
                Ok(true)
            }
            OpenOutcome::Rejected => Ok(false),
        }
    }

    #[wasm_bindgen(js_name = closeCompose)]
    pub fn close_compose(&mut self, frame_id: &str) -> Result<(), JsValue> {
        self.inner
            .close_compose(&parse_frame_id(frame_id)?)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = focusCompose)]
    pub fn focus_compose(&mut self, frame_id: &str) -> Result<(), JsValue> {
        self.inner
            .focus_compose(&parse_frame_id(frame_id)?)
            .map_err(to_js)
    }

    /// Apply a JSON `HostEvent`
    #[wasm_bindgen(js_name = handleEvent)]
    pub fn handle_event(&mut self, json: &str) -> Result<(), JsValue> {
        let event: HostEvent =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.handle_event(event).map_err(to_js)
    }

    /// Apply a JSON envelope posted by a compose frame.
    ///
    /// Envelopes for other tabs are dropped silently.
    #[wasm_bindgen(js_name = applyMessage)]
    pub fn apply_message(&mut self, json: &str) -> Result<(), JsValue> {
        let envelope = Envelope::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        match self.inner.apply(envelope) {
            Ok(()) | Err(HostError::WrongTab { .. }) => Ok(()),
            Err(e) => Err(to_js(e)),
        }
    }

    /// Frame id of the active window
    #[wasm_bindgen(js_name = activeFrameId)]
    pub fn active_frame_id(&self) -> Option<String> {
        self.inner
            .registry()
            .active()
            .map(|e| e.frame_id.as_str().to_string())
    }

    /// Registry state as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.inner.registry().snapshot().map_err(to_js)
    }

    /// Replace the registry with a snapshot
    pub fn restore(&mut self, json: &str) -> Result<(), JsValue> {
        self.inner.restore(json).map_err(to_js)
    }
}
