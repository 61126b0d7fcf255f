//! Protocol messages
//!
//! Wire shape mirrors the extension's browser message bus: a `name` tag and a
//! `data` payload with camelCase fields.
//!
//! ```json
//! {"parentTabId":"7:0","command":{"name":"set_css","data":{"selector":"iframe#f1","css":{"height":"260px"}}}}
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::IpcResult;
use crate::selector::Selector;
use crate::types::{FrameId, TabId};

/// Format a pixel length the way inline styles expect (`260px`)
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Parse an inline pixel length (`"260px"`, `"260"`); empty or other units yield `None`
pub fn parse_px(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
    number.trim().parse().ok()
}

/// Inline style properties to apply, keyed by CSS property name.
///
/// An empty value clears the property, restoring the stylesheet value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssDeclarations(BTreeMap<String, String>);

impl CssDeclarations {
    /// Empty declaration set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    /// A single `height` declaration; `None` clears the override
    pub fn height(height: Option<f64>) -> Self {
        Self::new().with("height", height.map(px).unwrap_or_default())
    }

    /// Look up one property
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Iterate over `(property, value)` pairs in property order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of declarations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no declarations are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Commands a compose frame sends to its parent tab
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "name",
    content = "data",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum FrameCommand {
    /// Apply inline styles to every element matched by `selector`
    SetCss {
        /// Target element(s)
        selector: Selector,
        /// Properties to set
        css: CssDeclarations,
    },
    /// Add a class to the matched element(s)
    AddClass {
        /// Class name
        class: String,
        /// Target element(s)
        selector: Selector,
    },
    /// Remove a class from the matched element(s)
    RemoveClass {
        /// Class name
        class: String,
        /// Target element(s)
        selector: Selector,
    },
    /// Keep the caret visible after a reply box changed height
    ScrollToCursorInReplyBox {
        /// Reply container selector (`#<frame_id>`)
        reply_msg_id: Selector,
        /// Caret offset from the top of the frame, in pixels
        cursor_offset_top: f64,
    },
    /// The frame gained focus
    SetActiveWindow {
        /// Window being activated
        frame_id: FrameId,
    },
    /// The user closed the window from inside the frame
    CloseComposeWindow {
        /// Window being closed
        frame_id: FrameId,
    },
}

impl FrameCommand {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetCss { .. } => "set_css",
            Self::AddClass { .. } => "add_class",
            Self::RemoveClass { .. } => "remove_class",
            Self::ScrollToCursorInReplyBox { .. } => "scroll_to_cursor_in_reply_box",
            Self::SetActiveWindow { .. } => "set_active_window",
            Self::CloseComposeWindow { .. } => "close_compose_window",
        }
    }

    /// Lifecycle commands double as host events for the window registry
    pub fn as_host_event(&self) -> Option<HostEvent> {
        match self {
            Self::SetActiveWindow { frame_id } => Some(HostEvent::FocusCompose {
                frame_id: frame_id.clone(),
            }),
            Self::CloseComposeWindow { frame_id } => Some(HostEvent::CloseCompose {
                frame_id: frame_id.clone(),
            }),
            _ => None,
        }
    }
}

/// Window lifecycle events consumed by the host page's registry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum HostEvent {
    /// User asked for a new secure compose window
    OpenCompose {
        /// Id the new frame will carry
        frame_id: FrameId,
    },
    /// A window was closed
    CloseCompose {
        /// Window being closed
        frame_id: FrameId,
    },
    /// A window received focus
    FocusCompose {
        /// Window being focused
        frame_id: FrameId,
    },
}

impl HostEvent {
    /// Frame the event refers to
    pub fn frame_id(&self) -> &FrameId {
        match self {
            Self::OpenCompose { frame_id }
            | Self::CloseCompose { frame_id }
            | Self::FocusCompose { frame_id } => frame_id,
        }
    }
}

/// A command addressed to a parent tab
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Tab that must apply the command
    pub parent_tab_id: TabId,
    /// The command itself
    pub command: FrameCommand,
}

impl Envelope {
    /// Address a command to a tab
    pub fn new(parent_tab_id: TabId, command: FrameCommand) -> Self {
        Self {
            parent_tab_id,
            command,
        }
    }

    /// Encode for the wire
    pub fn to_json(&self) -> IpcResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from the wire
    pub fn from_json(json: &str) -> IpcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
