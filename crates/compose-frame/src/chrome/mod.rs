//! Chrome State Machine
//!
//! A standalone compose window is in exactly one of three states:
//!
//! ```text
//!            toggle_minimize                toggle_full_screen
//!  Minimized <--------------> Normal <----------------------> Maximized
//!      ^                                                          |
//!      +---------------- toggle_minimize (via Normal) ------------+
//! ```
//!
//! Leaving `Maximized` for `Minimized` always passes through `Normal`: full
//! screen styling is reverted before the collapse is requested, so the two
//! never hold at once. A click straight on the body of a maximized window
//! returns it to `Normal`. Reply boxes have no chrome controls.
//!
//! Side effects are local class/style changes inside the frame plus
//! commands for the parent tab.

mod transitions;

use serde::{Deserialize, Serialize};

/// Visual state of a compose window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChromeState {
    /// Regular floating window
    #[default]
    Normal,
    /// Collapsed to its header
    Minimized,
    /// Full screen
    Maximized,
}

impl ChromeState {
    /// Display name for logs
    pub fn name(&self) -> &'static str {
        match self {
            ChromeState::Normal => "normal",
            ChromeState::Minimized => "minimized",
            ChromeState::Maximized => "maximized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal() {
        assert_eq!(ChromeState::default(), ChromeState::Normal);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ChromeState::Maximized).unwrap();
        assert_eq!(json, "\"maximized\"");
        assert_eq!(ChromeState::Minimized.name(), "minimized");
    }
}
