//! In-memory frame document for tests and headless embedding

use std::collections::{BTreeMap, BTreeSet};

use super::{FrameDom, FrameElement, RecipientInputMetrics};

/// A measured element with its mutable style state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryElement {
    /// Takes up layout space
    pub visible: bool,
    /// Content height
    pub height: f64,
    /// Border-box height
    pub outer_height: f64,
    /// Content width
    pub width: f64,
    /// Top plus bottom padding
    pub vertical_padding: f64,
    /// Class list
    pub classes: BTreeSet<String>,
    /// Inline styles
    pub styles: BTreeMap<String, String>,
    /// Attributes
    pub attributes: BTreeMap<String, String>,
}

impl MemoryElement {
    /// Visible element with equal content and border-box height
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            visible: true,
            height,
            outer_height: height,
            width,
            ..Default::default()
        }
    }

    /// Same element, hidden
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Same element with padding
    pub fn with_vertical_padding(mut self, padding: f64) -> Self {
        self.vertical_padding = padding;
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct MemoryRow {
    height: f64,
    visible: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct MemoryRecipientInput {
    metrics: RecipientInputMetrics,
    width: String,
}

/// Frame document held entirely in memory.
///
/// Elements that were never added behave like elements missing from the
/// page: they measure as `None` and ignore writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryFrameDom {
    elements: BTreeMap<FrameElement, MemoryElement>,
    rows: Vec<MemoryRow>,
    inputs: Vec<MemoryRecipientInput>,
}

impl MemoryFrameDom {
    /// Empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style element insert
    pub fn with_element(mut self, element: FrameElement, value: MemoryElement) -> Self {
        self.elements.insert(element, value);
        self
    }

    /// Insert or replace an element
    pub fn insert(&mut self, element: FrameElement, value: MemoryElement) {
        self.elements.insert(element, value);
    }

    /// Borrow an element
    pub fn element(&self, element: FrameElement) -> Option<&MemoryElement> {
        self.elements.get(&element)
    }

    /// Mutably borrow an element
    pub fn element_mut(&mut self, element: FrameElement) -> Option<&mut MemoryElement> {
        self.elements.get_mut(&element)
    }

    /// Inline style currently set on an element
    pub fn style(&self, element: FrameElement, property: &str) -> Option<&str> {
        self.elements
            .get(&element)
            .and_then(|e| e.styles.get(property))
            .map(String::as_str)
    }

    /// Attribute currently set on an element
    pub fn attribute(&self, element: FrameElement, name: &str) -> Option<&str> {
        self.elements
            .get(&element)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    /// Toggle visibility of an existing element
    pub fn set_visible(&mut self, element: FrameElement, visible: bool) {
        if let Some(e) = self.elements.get_mut(&element) {
            e.visible = visible;
        }
    }

    /// Change the measured height (content and border box) of an element
    pub fn set_height(&mut self, element: FrameElement, height: f64) {
        if let Some(e) = self.elements.get_mut(&element) {
            e.height = height;
            e.outer_height = height;
        }
    }

    /// Change the measured width of an element
    pub fn set_width(&mut self, element: FrameElement, width: f64) {
        if let Some(e) = self.elements.get_mut(&element) {
            e.width = width;
        }
    }

    /// Append a compose table row other than the text row
    pub fn push_row(&mut self, height: f64, visible: bool) {
        self.rows.push(MemoryRow { height, visible });
    }

    /// Append a recipient input box
    pub fn push_recipient_input(&mut self, metrics: RecipientInputMetrics) {
        self.inputs.push(MemoryRecipientInput {
            metrics,
            width: String::new(),
        });
    }

    /// Replace the metrics of an existing recipient input
    pub fn update_recipient_input(&mut self, index: usize, metrics: RecipientInputMetrics) {
        if let Some(input) = self.inputs.get_mut(index) {
            input.metrics = metrics;
        }
    }

    /// CSS width last written to a recipient input
    pub fn recipient_input_width(&self, index: usize) -> Option<&str> {
        self.inputs.get(index).map(|i| i.width.as_str())
    }
}

impl FrameDom for MemoryFrameDom {
    fn is_visible(&self, element: FrameElement) -> bool {
        self.elements.get(&element).is_some_and(|e| e.visible)
    }

    fn outer_height(&self, element: FrameElement) -> Option<f64> {
        self.elements.get(&element).map(|e| e.outer_height)
    }

    fn height(&self, element: FrameElement) -> Option<f64> {
        self.elements.get(&element).map(|e| e.height)
    }

    fn width(&self, element: FrameElement) -> Option<f64> {
        self.elements.get(&element).map(|e| e.width)
    }

    fn vertical_padding(&self, element: FrameElement) -> f64 {
        self.elements
            .get(&element)
            .map(|e| e.vertical_padding)
            .unwrap_or(0.0)
    }

    fn set_style(&mut self, element: FrameElement, property: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(&element) {
            if value.is_empty() {
                e.styles.remove(property);
            } else {
                e.styles.insert(property.to_string(), value.to_string());
            }
        }
    }

    fn add_class(&mut self, element: FrameElement, class: &str) {
        if let Some(e) = self.elements.get_mut(&element) {
            e.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, element: FrameElement, class: &str) {
        if let Some(e) = self.elements.get_mut(&element) {
            e.classes.remove(class);
        }
    }

    fn has_class(&self, element: FrameElement, class: &str) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|e| e.classes.contains(class))
    }

    fn set_attribute(&mut self, element: FrameElement, name: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(&element) {
            e.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn visible_row_heights_except_text(&self) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|r| r.visible)
            .map(|r| r.height)
            .collect()
    }

    fn recipient_input_count(&self) -> usize {
        self.inputs.len()
    }

    fn recipient_input(&self, index: usize) -> Option<RecipientInputMetrics> {
        self.inputs.get(index).map(|i| i.metrics)
    }

    fn set_recipient_input_width(&mut self, index: usize, width: &str) {
        if let Some(input) = self.inputs.get_mut(index) {
            input.width = width.to_string();
        }
    }
}
