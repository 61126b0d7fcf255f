//! Debounced triggering of layout work
//!
//! Keystrokes and window resizes arrive in storms. Each storm is coalesced
//! by a trailing [`Debouncer`] whose delay comes from a [`DebounceTier`];
//! the work runs once the storm has been quiet for that long.
//!
//! Time is injected (`now_ms`) so everything here runs without timers.

mod debounce;
mod scheduler;

pub use debounce::Debouncer;
pub use scheduler::{ResizeScheduler, ScheduledJob};

use serde::{Deserialize, Serialize};

use crate::window::WindowKind;

/// Named delay policies for coalescing high-frequency events
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebounceTier {
    /// Standalone window resize; button layout lags visibly otherwise
    Fast,
    /// Keystrokes in the text input
    Slow,
    /// Reply box window resize; the host page fires many resize events
    VerySlow,
}

impl DebounceTier {
    /// Tier used for keystroke-driven resizing
    pub const KEYSTROKE: DebounceTier = DebounceTier::Slow;

    /// Tier used for window-resize-driven recompute
    pub fn for_window_resize(kind: WindowKind) -> Self {
        match kind {
            WindowKind::ReplyBox => DebounceTier::VerySlow,
            WindowKind::Standalone => DebounceTier::Fast,
        }
    }
}
