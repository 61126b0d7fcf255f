//! WASM bindings for the compose frame
//!
//! Provides the browser-backed [`FrameDom`] and [`MessageBus`] plus the
//! `ComposeFrame` class exported to the frame's JavaScript. Timers stay in
//! JavaScript: every event method returns the next deadline (ms since epoch)
//! and the glue calls `tick()` at that time.

use compose_ipc::command::parse_px;
use compose_ipc::{Envelope, FrameId, IpcError, IpcResult, MessageBus, TabId};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{EngineQuirks, FrameConfig};
use crate::dom::{
    ChipBounds, FrameDom, FrameElement, RecipientInputMetrics, ALL_CELLS_EXCEPT_TEXT,
    RECIPIENTS_INPUTS,
};
use crate::frame::ComposeFrame;
use crate::window::{ComposeWindow, WindowKind};

/// Selector of the last recipient chip, relative to the input's parent
const LAST_RECIPIENT_CHIP: &str = ".recipients span:last-child";

fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

fn as_html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

fn computed_px(element: &Element, property: &str) -> f64 {
    web_sys::window()
        .and_then(|w| w.get_computed_style(element).ok().flatten())
        .and_then(|style| style.get_property_value(property).ok())
        .and_then(|value| parse_px(&value))
        .unwrap_or(0.0)
}

fn is_rendered(element: &HtmlElement) -> bool {
    element.offset_width() > 0 || element.offset_height() > 0
}

/// [`FrameDom`] over the frame's live document
pub struct WebFrameDom {
    document: Document,
}

impl WebFrameDom {
    /// Wrap a document
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    fn find(&self, element: FrameElement) -> Option<HtmlElement> {
        self.document
            .query_selector(element.selector())
            .ok()
            .flatten()
            .and_then(as_html)
    }

    fn all(&self, selector: &str) -> Vec<HtmlElement> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn recipient_inputs(&self) -> Vec<HtmlElement> {
        self.all(RECIPIENTS_INPUTS)
    }
}

impl FrameDom for WebFrameDom {
    fn is_visible(&self, element: FrameElement) -> bool {
        self.find(element).is_some_and(|el| is_rendered(&el))
    }

    fn outer_height(&self, element: FrameElement) -> Option<f64> {
        self.find(element).map(|el| el.offset_height() as f64)
    }

    fn height(&self, element: FrameElement) -> Option<f64> {
        self.find(element).map(|el| {
            let padding = computed_px(&el, "padding-top") + computed_px(&el, "padding-bottom");
            (el.client_height() as f64 - padding).max(0.0)
        })
    }

    fn width(&self, element: FrameElement) -> Option<f64> {
        self.find(element).map(|el| {
            let padding = computed_px(&el, "padding-left") + computed_px(&el, "padding-right");
            (el.client_width() as f64 - padding).max(0.0)
        })
    }

    fn vertical_padding(&self, element: FrameElement) -> f64 {
        self.find(element).map_or(0.0, |el| {
            computed_px(&el, "padding-top") + computed_px(&el, "padding-bottom")
        })
    }

    fn set_style(&mut self, element: FrameElement, property: &str, value: &str) {
        let Some(el) = self.find(element) else {
            return;
        };
        let style = el.style();
        let _ = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
    }

    fn add_class(&mut self, element: FrameElement, class: &str) {
        if let Some(el) = self.find(element) {
            let _ = el.class_list().add_1(class);
        }
    }

    fn remove_class(&mut self, element: FrameElement, class: &str) {
        if let Some(el) = self.find(element) {
            let _ = el.class_list().remove_1(class);
        }
    }

    fn has_class(&self, element: FrameElement, class: &str) -> bool {
        self.find(element)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn set_attribute(&mut self, element: FrameElement, name: &str, value: &str) {
        if let Some(el) = self.find(element) {
            let _ = el.set_attribute(name, value);
        }
    }

    fn visible_row_heights_except_text(&self) -> Vec<f64> {
        self.all(ALL_CELLS_EXCEPT_TEXT)
            .into_iter()
            .filter(is_rendered)
            .filter_map(|cell| cell.parent_element())
            .map(|row| {
                let padding = computed_px(&row, "padding-top") + computed_px(&row, "padding-bottom");
                (row.client_height() as f64 - padding).max(0.0)
            })
            .collect()
    }

    fn recipient_input_count(&self) -> usize {
        self.recipient_inputs().len()
    }

    fn recipient_input(&self, index: usize) -> Option<RecipientInputMetrics> {
        let input = self.recipient_inputs().into_iter().nth(index)?;
        let parent = input.parent_element()?;
        let parent_padding = computed_px(&parent, "padding-left") + computed_px(&parent, "padding-right");

        let last_chip = parent
            .query_selector(LAST_RECIPIENT_CHIP)
            .ok()
            .flatten()
            .and_then(as_html)
            .map(|chip| ChipBounds {
                left: chip.offset_left() as f64,
                width: chip.offset_width() as f64,
            });

        let next_sibling_width = input
            .next_element_sibling()
            .and_then(as_html)
            .map(|sibling| sibling.offset_width() as f64);

        Some(RecipientInputMetrics {
            container_width: (parent.client_width() as f64 - parent_padding).max(0.0),
            horizontal_padding: computed_px(&input, "padding-left")
                + computed_px(&input, "padding-right"),
            next_sibling_width,
            last_chip,
        })
    }

    fn set_recipient_input_width(&mut self, index: usize, width: &str) {
        if let Some(input) = self.recipient_inputs().into_iter().nth(index) {
            let _ = input.style().set_property("width", width);
        }
    }
}

/// Posts envelopes to the parent window as JSON strings
pub struct PostMessageBus {
    target_origin: String,
}

impl PostMessageBus {
    /// Bus that only delivers to `target_origin`
    pub fn new(target_origin: impl Into<String>) -> Self {
        Self {
            target_origin: target_origin.into(),
        }
    }
}

impl MessageBus for PostMessageBus {
    fn send(&self, envelope: Envelope) -> IpcResult<()> {
        let tab = envelope.parent_tab_id.to_string();
        let parent = web_sys::window()
            .and_then(|w| w.parent().ok().flatten())
            .ok_or(IpcError::ChannelClosed(tab))?;
        let json = envelope.to_json()?;
        parent
            .post_message(&JsValue::from_str(&json), &self.target_origin)
            .map_err(|e| IpcError::Rejected(format!("{:?}", e)))
    }
}

/// Browser handle for one compose frame
#[wasm_bindgen(js_name = ComposeFrame)]
pub struct WasmComposeFrame {
    inner: ComposeFrame<WebFrameDom, PostMessageBus>,
}

#[wasm_bindgen(js_class = ComposeFrame)]
impl WasmComposeFrame {
    /// Attach to the current document.
    ///
    /// `config_json` may hold a partial `FrameConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        frame_id: &str,
        parent_tab_id: &str,
        is_reply_box: bool,
        target_origin: &str,
        config_json: Option<String>,
    ) -> Result<WasmComposeFrame, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => FrameConfig::from_json(&json).map_err(|e| {
                log(&format!("[compose-frame] {}", e));
                JsValue::from_str(&e.to_string())
            })?,
            None => FrameConfig::default(),
        };
        let quirks = web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .map(|ua| EngineQuirks::from_user_agent(&ua))
            .unwrap_or_default();
        let kind = if is_reply_box {
            WindowKind::ReplyBox
        } else {
            WindowKind::Standalone
        };
        let dom = WebFrameDom::from_window()
            .ok_or_else(|| JsValue::from_str("compose frame has no document"))?;

        let frame_id = FrameId::parse(frame_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let window = ComposeWindow::with_config(
            frame_id,
            TabId::new(parent_tab_id),
            kind,
            quirks,
            config,
        );
        Ok(Self {
            inner: ComposeFrame::new(window, dom, PostMessageBus::new(target_origin)),
        })
    }

    /// Callback invoked when the recipient preview must be recomputed
    #[wasm_bindgen(js_name = setPreviewRefresh)]
    pub fn set_preview_refresh(&mut self, callback: js_sys::Function) {
        self.inner.set_preview_refresh(move || {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                log(&format!("[compose-frame] preview refresh failed: {:?}", e));
            }
        });
    }

    #[wasm_bindgen(js_name = onRender)]
    pub fn on_render(&mut self) -> Option<f64> {
        self.inner.on_render(js_sys::Date::now())
    }

    #[wasm_bindgen(js_name = onKeyup)]
    pub fn on_keyup(&mut self) -> Option<f64> {
        self.inner.on_keyup(js_sys::Date::now())
    }

    #[wasm_bindgen(js_name = onWindowResize)]
    pub fn on_window_resize(&mut self) -> Option<f64> {
        self.inner.on_window_resize(js_sys::Date::now())
    }

    #[wasm_bindgen(js_name = onCursorMoved)]
    pub fn on_cursor_moved(&mut self, offset_top: f64) {
        self.inner.on_cursor_moved(js_sys::Date::now(), offset_top);
    }

    /// Run due work; returns the next deadline, if any
    pub fn tick(&mut self) -> Option<f64> {
        self.inner.tick(js_sys::Date::now())
    }

    #[wasm_bindgen(js_name = resizeComposeBox)]
    pub fn resize_compose_box(&mut self, add_extra: f64, cursor_offset_top: Option<f64>) {
        self.inner.resize_compose_box(add_extra, cursor_offset_top);
    }

    #[wasm_bindgen(js_name = minimizeClicked)]
    pub fn minimize_clicked(&mut self) -> Result<(), JsValue> {
        self.inner
            .minimize_clicked()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = popoutClicked)]
    pub fn popout_clicked(&mut self) -> Result<(), JsValue> {
        self.inner
            .popout_clicked()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = bodyClicked)]
    pub fn body_clicked(&mut self, target_is_body: bool) {
        self.inner.body_clicked(target_is_body);
    }

    #[wasm_bindgen(js_name = inputFocused)]
    pub fn input_focused(&mut self) {
        self.inner.input_focused();
    }

    #[wasm_bindgen(js_name = closeClicked)]
    pub fn close_clicked(&mut self) {
        self.inner.close_clicked();
    }

    #[wasm_bindgen(js_name = recipientsChanged)]
    pub fn recipients_changed(&mut self) {
        self.inner.recipients_changed();
    }

    /// Current chrome state: "normal", "minimized" or "maximized"
    pub fn state(&self) -> String {
        self.inner.window().state().name().to_string()
    }
}
