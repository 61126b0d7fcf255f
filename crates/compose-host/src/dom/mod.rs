//! Host page DOM access
//!
//! The host page owns the containers compose frames live in. Frames name
//! elements by [`Selector`]; adapters resolve every part of a union and
//! silently skip selectors that match nothing.

mod memory;

pub use memory::{MemoryContainerDom, MemoryNode, MemoryWindow};

use compose_ipc::{CssDeclarations, FrameId, Selector};

/// Mutations the host page applies to compose window containers
pub trait ContainerDom {
    /// Create the container for a newly opened standalone window
    fn insert_window(&mut self, frame_id: &FrameId);

    /// Remove a window's container
    fn remove_window(&mut self, frame_id: &FrameId);

    /// Apply inline styles; empty values remove the property
    fn set_css(&mut self, selector: &Selector, css: &CssDeclarations);

    /// Add a class
    fn add_class(&mut self, selector: &Selector, class: &str);

    /// Remove a class
    fn remove_class(&mut self, selector: &Selector, class: &str);

    /// Set an attribute
    fn set_attribute(&mut self, selector: &Selector, name: &str, value: &str);

    /// Scroll the reply container so the caret at `cursor_offset_top` is visible
    fn scroll_to_cursor(&mut self, reply_msg: &Selector, cursor_offset_top: f64);

    /// Show a transient notice to the user
    fn show_notice(&mut self, text: &str);
}
