//! Per-frame compose window state

use compose_ipc::{Envelope, FrameCommand, FrameId, TabId};
use serde::{Deserialize, Serialize};

use crate::chrome::ChromeState;
use crate::config::{EngineQuirks, FrameConfig};

/// How the compose surface is embedded in the host page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    /// Free-floating window with minimize/maximize/popout
    #[default]
    Standalone,
    /// Inline reply inside a message thread, sized by its content
    ReplyBox,
}

/// Work produced by a chrome or layout operation.
///
/// Commands are for the parent tab, in order. The recipient preview belongs
/// to the recipients module, so a refresh is only requested here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameEffects {
    /// Commands to send to the parent tab, in order
    pub commands: Vec<FrameCommand>,
    /// The collapsed recipient preview must be recomputed
    pub refresh_recipient_preview: bool,
}

impl FrameEffects {
    /// No work
    pub fn none() -> Self {
        Self::default()
    }

    /// Queue a command
    pub fn push(&mut self, command: FrameCommand) {
        self.commands.push(command);
    }

    /// Append another batch after this one
    pub fn extend(&mut self, other: FrameEffects) {
        self.commands.extend(other.commands);
        self.refresh_recipient_preview |= other.refresh_recipient_preview;
    }

    /// True when nothing needs sending or refreshing
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && !self.refresh_recipient_preview
    }
}

/// State owned by one compose frame.
///
/// Constructed once per iframe; nothing here is global, so tests build as
/// many independent windows as they need.
#[derive(Clone, Debug)]
pub struct ComposeWindow {
    pub(crate) frame_id: FrameId,
    pub(crate) parent_tab_id: TabId,
    pub(crate) kind: WindowKind,
    pub(crate) state: ChromeState,
    pub(crate) last_reply_box_table_height: f64,
    pub(crate) ref_body_height: Option<f64>,
    pub(crate) quirks: EngineQuirks,
    pub(crate) config: FrameConfig,
}

impl ComposeWindow {
    /// Create a window in the `Normal` state with default configuration
    pub fn new(frame_id: FrameId, parent_tab_id: TabId, kind: WindowKind) -> Self {
        Self::with_config(
            frame_id,
            parent_tab_id,
            kind,
            EngineQuirks::NONE,
            FrameConfig::default(),
        )
    }

    /// Create a window with explicit quirks and configuration
    pub fn with_config(
        frame_id: FrameId,
        parent_tab_id: TabId,
        kind: WindowKind,
        quirks: EngineQuirks,
        config: FrameConfig,
    ) -> Self {
        Self {
            frame_id,
            parent_tab_id,
            kind,
            state: ChromeState::Normal,
            last_reply_box_table_height: 0.0,
            ref_body_height: None,
            quirks,
            config,
        }
    }

    /// Frame identifier
    pub fn frame_id(&self) -> &FrameId {
        &self.frame_id
    }

    /// Tab that receives this window's messages
    pub fn parent_tab_id(&self) -> &TabId {
        &self.parent_tab_id
    }

    /// Standalone window or inline reply
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    /// True for inline reply boxes
    pub fn is_reply_box(&self) -> bool {
        self.kind == WindowKind::ReplyBox
    }

    /// Current chrome state
    pub fn state(&self) -> ChromeState {
        self.state
    }

    /// Whether the window is collapsed to its header
    pub fn is_minimized(&self) -> bool {
        self.state == ChromeState::Minimized
    }

    /// Whether the window is in full screen
    pub fn is_maximized(&self) -> bool {
        self.state == ChromeState::Maximized
    }

    /// Last height reported to the parent for a reply box
    pub fn last_reply_box_table_height(&self) -> f64 {
        self.last_reply_box_table_height
    }

    /// Baseline body height captured for the manual-height workaround
    pub fn ref_body_height(&self) -> Option<f64> {
        self.ref_body_height
    }

    /// Injected engine capabilities
    pub fn quirks(&self) -> EngineQuirks {
        self.quirks
    }

    /// Active configuration
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }

    /// Address a command to this window's parent tab
    pub fn envelope(&self, command: FrameCommand) -> Envelope {
        Envelope::new(self.parent_tab_id.clone(), command)
    }

    /// Command announcing that this window received focus
    pub fn activation(&self) -> FrameCommand {
        FrameCommand::SetActiveWindow {
            frame_id: self.frame_id.clone(),
        }
    }

    /// Command asking the host to close this window
    pub fn close_request(&self) -> FrameCommand {
        FrameCommand::CloseComposeWindow {
            frame_id: self.frame_id.clone(),
        }
    }

    /// Back to the freshly constructed state, keeping identity and config
    pub fn reset(&mut self) {
        self.state = ChromeState::Normal;
        self.last_reply_box_table_height = 0.0;
        self.ref_body_height = None;
    }
}
