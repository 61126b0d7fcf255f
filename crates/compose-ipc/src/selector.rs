//! CSS selectors for host-page elements a compose frame may address
//!
//! A frame never reads the host DOM; it only names the elements it wants
//! mutated. All names are derived from the frame's own [`FrameId`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::FrameId;

/// Class carried by every standalone compose window container
pub const WINDOW_CHROME_CLASS: &str = "secure_compose_window";

/// Attribute linking a window container to its frame
pub const FRAME_ID_ATTRIBUTE: &str = "data-frame-id";

/// A CSS selector string, possibly a comma-separated union
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    /// Wrap a raw selector
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The iframe element itself: `iframe#<frame_id>`
    pub fn iframe(frame_id: &FrameId) -> Self {
        Self(format!("iframe#{}", frame_id))
    }

    /// The standalone window chrome enclosing the iframe
    pub fn window_chrome(frame_id: &FrameId) -> Self {
        Self(format!(
            "div.{}[{}=\"{}\"]",
            WINDOW_CHROME_CLASS, FRAME_ID_ATTRIBUTE, frame_id
        ))
    }

    /// The reply container scrolled by `scroll_to_cursor_in_reply_box`
    pub fn reply_msg(frame_id: &FrameId) -> Self {
        Self(format!("#{}", frame_id))
    }

    /// Join selectors into a single union (`a, b`)
    pub fn union(selectors: &[Selector]) -> Self {
        let joined = selectors
            .iter()
            .map(|s| s.0.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self(joined)
    }

    /// Split a union back into its individual selectors
    pub fn parts(&self) -> impl Iterator<Item = Selector> + '_ {
        self.0
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Selector::new)
    }

    /// Borrow the raw selector string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
