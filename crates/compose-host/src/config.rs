//! Host page configuration

use serde::{Deserialize, Serialize};

use crate::error::{HostError, HostResult};

/// Most standalone compose windows open at once
pub const MAX_COMPOSE_WINDOWS: usize = 3;

/// Tunables for the host page.
///
/// Deserializes from partial JSON; absent fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Cap on concurrently open standalone windows
    pub max_windows: usize,
    /// Toast shown when the cap is hit
    pub capacity_notice: String,
    /// Class on the active window container
    pub active_class: String,
    /// Class on the previously active window container
    pub previous_active_class: String,
    /// Attribute carrying the 1-based open order
    pub order_attribute: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_windows: MAX_COMPOSE_WINDOWS,
            capacity_notice: format!(
                "Only {} secure compose windows can be opened at a time",
                MAX_COMPOSE_WINDOWS
            ),
            active_class: "active".to_string(),
            previous_active_class: "previous_active".to_string(),
            order_attribute: "data-order".to_string(),
        }
    }
}

impl HostConfig {
    /// Parse from JSON, filling gaps with defaults
    pub fn from_json(json: &str) -> HostResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| HostError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no page can run with
    pub fn validate(&self) -> HostResult<()> {
        if self.max_windows == 0 {
            return Err(HostError::Config("max_windows must be at least 1".to_string()));
        }
        Ok(())
    }
}
