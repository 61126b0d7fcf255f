//! Frame configuration and engine capabilities

use serde::{Deserialize, Serialize};

use crate::error::{ChromeError, ChromeResult};
use crate::schedule::DebounceTier;

/// Tunables for sizing and chrome behaviour.
///
/// Deserializes from partial JSON; absent fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Minimum reply box height while the compose table is visible
    pub min_reply_box_height: f64,
    /// Height deltas at or below this are not reported to the parent
    pub resize_tolerance_px: f64,
    /// Fixed margin subtracted from every recipient input width
    pub recipient_input_margin: f64,
    /// Space that must remain for typing after the last recipient chip
    pub min_recipient_input_width: f64,
    /// Gap between the text container and the input text max-width
    pub text_container_margin: f64,
    /// Body height assumed when the body cannot be measured
    pub fallback_body_height: f64,
    /// Quiet period after first render before automatic resizing starts
    pub render_grace_ms: f64,
    /// Delay for the `Fast` debounce tier
    pub fast_tier_ms: f64,
    /// Delay for the `Slow` debounce tier
    pub slow_tier_ms: f64,
    /// Delay for the `VerySlow` debounce tier
    pub very_slow_tier_ms: f64,
    /// Class toggled on body and window chrome in full screen
    pub full_screen_class: String,
    /// Class toggled on body while minimized
    pub minimized_class: String,
    /// Popout icon while the window is maximized
    pub exit_full_screen_icon: String,
    /// Popout icon while the window is not maximized
    pub full_screen_icon: String,
    /// Popout title while the window is maximized
    pub exit_full_screen_title: String,
    /// Popout title while the window is not maximized
    pub full_screen_title: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            min_reply_box_height: 260.0,
            resize_tolerance_px: crate::layout::RESIZE_TOLERANCE_PX,
            recipient_input_margin: 11.0,
            min_recipient_input_width: 150.0,
            text_container_margin: 8.0,
            fallback_body_height: 605.0,
            render_grace_ms: 1000.0,
            fast_tier_ms: 50.0,
            slow_tier_ms: 200.0,
            very_slow_tier_ms: 500.0,
            full_screen_class: "full_window".to_string(),
            minimized_class: "minimized".to_string(),
            exit_full_screen_icon: "/img/svgs/minimize.svg".to_string(),
            full_screen_icon: "/img/svgs/maximize.svg".to_string(),
            exit_full_screen_title: "Exit full screen".to_string(),
            full_screen_title: "Full screen".to_string(),
        }
    }
}

impl FrameConfig {
    /// Parse configuration from JSON
    pub fn from_json(json: &str) -> ChromeResult<Self> {
        serde_json::from_str(json).map_err(|e| ChromeError::Config(e.to_string()))
    }

    /// Delay for a debounce tier in milliseconds
    pub fn tier_delay_ms(&self, tier: DebounceTier) -> f64 {
        match tier {
            DebounceTier::Fast => self.fast_tier_ms,
            DebounceTier::Slow => self.slow_tier_ms,
            DebounceTier::VerySlow => self.very_slow_tier_ms,
        }
    }
}

/// Browser-engine capabilities, detected once by the embedder and injected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineQuirks {
    /// The engine lets the input area grow the page past the frame, so its
    /// height has to be set by hand on standalone windows.
    pub requires_manual_height_workaround: bool,
}

impl EngineQuirks {
    /// Quirks for an engine that lays the compose table out correctly
    pub const NONE: EngineQuirks = EngineQuirks {
        requires_manual_height_workaround: false,
    };

    /// Detect quirks from a user agent string
    pub fn from_user_agent(user_agent: &str) -> Self {
        Self {
            requires_manual_height_workaround: user_agent.contains("Firefox/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FrameConfig::default();
        assert_eq!(config.min_reply_box_height, 260.0);
        assert_eq!(config.resize_tolerance_px, 2.0);
        assert_eq!(config.recipient_input_margin, 11.0);
        assert_eq!(config.render_grace_ms, 1000.0);
        assert_eq!(config.full_screen_class, "full_window");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FrameConfig::from_json(r#"{"min_reply_box_height": 300}"#).unwrap();
        assert_eq!(config.min_reply_box_height, 300.0);
        assert_eq!(config.slow_tier_ms, 200.0);
    }

    #[test]
    fn test_invalid_json() {
        let err = FrameConfig::from_json(r#"{"fast_tier_ms": "soon"}"#).unwrap_err();
        assert!(matches!(err, ChromeError::Config(_)));
    }

    #[test]
    fn test_tier_delays_are_ordered() {
        let config = FrameConfig::default();
        let fast = config.tier_delay_ms(DebounceTier::Fast);
        let slow = config.tier_delay_ms(DebounceTier::Slow);
        let very_slow = config.tier_delay_ms(DebounceTier::VerySlow);
        assert!(fast < slow && slow < very_slow);
    }

    #[test]
    fn test_quirks_from_user_agent() {
        let firefox = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
        let chrome = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
        assert!(EngineQuirks::from_user_agent(firefox).requires_manual_height_workaround);
        assert!(!EngineQuirks::from_user_agent(chrome).requires_manual_height_workaround);
        assert_eq!(EngineQuirks::default(), EngineQuirks::NONE);
    }
}
