//! DOM access inside the compose frame
//!
//! The surrounding compose UI owns these elements; the chrome only measures
//! them and adjusts styles and classes. Reads return `None` when an element
//! is missing so callers can fall back to zero instead of failing.

mod memory;

pub use memory::{MemoryElement, MemoryFrameDom};

/// Cached elements the chrome reads or mutates
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FrameElement {
    /// Document body of the frame
    Body,
    /// Window header (title bar with minimize/popout controls)
    Header,
    /// Main compose table
    ComposeTable,
    /// Panel shown after a reply was sent
    ReplyMsgSuccessful,
    /// Initial prompt shown before composing a reply
    Prompt,
    /// Rich text input
    InputText,
    /// Container around the text input
    TextContainer,
    /// Attachment list
    AttachmentList,
    /// "Show previous message" triple-dot icon
    TripleDot,
    /// Popout (full screen) icon
    IconPopout,
    /// Collapsed recipients preview
    RecipientsPlaceholder,
}

impl FrameElement {
    /// Selector used to locate the element in the frame document
    pub fn selector(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Header => "#section_header",
            Self::ComposeTable => "table#compose",
            Self::ReplyMsgSuccessful => "#reply_message_successful_container",
            Self::Prompt => "div#initial_prompt",
            Self::InputText => "div#input_text",
            Self::TextContainer => ".text_container",
            Self::AttachmentList => "#fineuploader",
            Self::TripleDot => "#tripledot",
            Self::IconPopout => ".popout img",
            Self::RecipientsPlaceholder => "#recipients_placeholder",
        }
    }
}

/// Selector for every compose table cell other than the text cell
pub const ALL_CELLS_EXCEPT_TEXT: &str = "table#compose > tbody > tr > :not(.text)";

/// Selector for the recipient input boxes
pub const RECIPIENTS_INPUTS: &str = "#input_addresses_container input";

/// Horizontal extent of a recipient chip, relative to its input container
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChipBounds {
    /// Left edge
    pub left: f64,
    /// Outer width
    pub width: f64,
}

impl ChipBounds {
    /// Right edge of the chip
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Measurements for one recipient input box
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RecipientInputMetrics {
    /// Inner width of the input's parent
    pub container_width: f64,
    /// Left plus right padding of the input
    pub horizontal_padding: f64,
    /// Outer width of the element following the input, if any
    pub next_sibling_width: Option<f64>,
    /// Last recipient chip already entered, if any
    pub last_chip: Option<ChipBounds>,
}

/// Read/write access to the compose frame's own document
pub trait FrameDom {
    /// Whether the element exists and takes up layout space
    fn is_visible(&self, element: FrameElement) -> bool;

    /// Border-box height
    fn outer_height(&self, element: FrameElement) -> Option<f64>;

    /// Content height
    fn height(&self, element: FrameElement) -> Option<f64>;

    /// Content width
    fn width(&self, element: FrameElement) -> Option<f64>;

    /// Top plus bottom padding
    fn vertical_padding(&self, element: FrameElement) -> f64;

    /// Set an inline style; an empty value removes it
    fn set_style(&mut self, element: FrameElement, property: &str, value: &str);

    /// Add a class
    fn add_class(&mut self, element: FrameElement, class: &str);

    /// Remove a class
    fn remove_class(&mut self, element: FrameElement, class: &str);

    /// Whether the element carries a class
    fn has_class(&self, element: FrameElement, class: &str) -> bool;

    /// Set an attribute
    fn set_attribute(&mut self, element: FrameElement, name: &str, value: &str);

    /// Row heights of visible compose table cells other than the text cell
    fn visible_row_heights_except_text(&self) -> Vec<f64>;

    /// Number of recipient input boxes
    fn recipient_input_count(&self) -> usize;

    /// Measure one recipient input; `None` if the index is out of range
    fn recipient_input(&self, index: usize) -> Option<RecipientInputMetrics>;

    /// Set a recipient input's CSS width (any CSS length, e.g. `100%`)
    fn set_recipient_input_width(&mut self, index: usize, width: &str);
}
