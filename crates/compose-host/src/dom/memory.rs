//! In-memory host page for tests and headless use

use std::collections::{BTreeMap, BTreeSet};

use compose_ipc::command::parse_px;
use compose_ipc::{CssDeclarations, FrameId, Selector};
use tracing::debug;

use super::ContainerDom;

/// One element: classes, inline styles and attributes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryNode {
    /// Class list
    pub classes: BTreeSet<String>,
    /// Inline styles
    pub styles: BTreeMap<String, String>,
    /// Attributes
    pub attributes: BTreeMap<String, String>,
}

impl MemoryNode {
    /// Whether the node carries `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Inline style value
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    /// Attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// The host-side elements of one compose frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryWindow {
    /// `iframe#<id>`
    pub iframe: MemoryNode,
    /// Window chrome around the iframe; unused for reply boxes
    pub chrome: MemoryNode,
    /// Last caret offset the reply container was scrolled to
    pub scrolled_to: Option<f64>,
}

/// Host page that keeps containers in maps.
///
/// Geometry is modelled just enough to observe chrome transitions: a window
/// with the full screen class fills the viewport, otherwise it has its
/// natural size unless an inline height overrides it.
#[derive(Clone, Debug)]
pub struct MemoryContainerDom {
    windows: BTreeMap<FrameId, MemoryWindow>,
    notices: Vec<String>,
    viewport: (f64, f64),
    window_size: (f64, f64),
    full_screen_class: String,
}

impl Default for MemoryContainerDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryContainerDom {
    /// Empty page with a 1280x800 viewport and 640x605 windows
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            notices: Vec::new(),
            viewport: (1280.0, 800.0),
            window_size: (640.0, 605.0),
            full_screen_class: "full_window".to_string(),
        }
    }

    /// Override the viewport size
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport = (width, height);
        self
    }

    /// Override the natural window size
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Add an inline reply frame; reply boxes are not registry windows
    pub fn insert_reply_box(&mut self, frame_id: &FrameId) {
        self.windows.entry(frame_id.clone()).or_default();
    }

    /// Host elements of a frame
    pub fn window(&self, frame_id: &FrameId) -> Option<&MemoryWindow> {
        self.windows.get(frame_id)
    }

    /// Frame ids with a container, sorted
    pub fn frame_ids(&self) -> impl Iterator<Item = &FrameId> {
        self.windows.keys()
    }

    /// Notices shown so far
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Rendered `(width, height)` of a window container
    pub fn offset_size(&self, frame_id: &FrameId) -> Option<(f64, f64)> {
        let window = self.windows.get(frame_id)?;
        if window.chrome.has_class(&self.full_screen_class) {
            return Some(self.viewport);
        }
        let height = window
            .chrome
            .style("height")
            .and_then(parse_px)
            .unwrap_or(self.window_size.1);
        Some((self.window_size.0, height))
    }

    fn for_each_node(&mut self, selector: &Selector, mut f: impl FnMut(&mut MemoryNode)) {
        for part in selector.parts() {
            let mut matched = false;
            for (frame_id, window) in self.windows.iter_mut() {
                if part == Selector::iframe(frame_id) {
                    f(&mut window.iframe);
                    matched = true;
                } else if part == Selector::window_chrome(frame_id) {
                    f(&mut window.chrome);
                    matched = true;
                }
            }
            if !matched {
                debug!(selector = %part, "selector matched nothing");
            }
        }
    }
}

impl ContainerDom for MemoryContainerDom {
    fn insert_window(&mut self, frame_id: &FrameId) {
        self.windows.entry(frame_id.clone()).or_default();
    }

    fn remove_window(&mut self, frame_id: &FrameId) {
        self.windows.remove(frame_id);
    }

    fn set_css(&mut self, selector: &Selector, css: &CssDeclarations) {
        self.for_each_node(selector, |node| {
            for (property, value) in css.iter() {
                if value.is_empty() {
                    node.styles.remove(property);
                } else {
                    node.styles.insert(property.to_string(), value.to_string());
                }
            }
        });
    }

    fn add_class(&mut self, selector: &Selector, class: &str) {
        self.for_each_node(selector, |node| {
            node.classes.insert(class.to_string());
        });
    }

    fn remove_class(&mut self, selector: &Selector, class: &str) {
        self.for_each_node(selector, |node| {
            node.classes.remove(class);
        });
    }

    fn set_attribute(&mut self, selector: &Selector, name: &str, value: &str) {
        self.for_each_node(selector, |node| {
            node.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn scroll_to_cursor(&mut self, reply_msg: &Selector, cursor_offset_top: f64) {
        for (frame_id, window) in self.windows.iter_mut() {
            if reply_msg == &Selector::reply_msg(frame_id) {
                window.scrolled_to = Some(cursor_offset_top);
            }
        }
    }

    fn show_notice(&mut self, text: &str) {
        self.notices.push(text.to_string());
    }
}
