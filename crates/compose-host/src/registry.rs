//! Multi-Window Registry
//!
//! Tracks the standalone compose windows open in one host page: their open
//! order and which one is active. Entries are kept sorted by `order`.
//!
//! Invariants after every operation:
//! - at most `max_windows` entries
//! - `order` values are exactly `1..=len`, in open sequence
//! - exactly one entry is active whenever any exist
//! - at most one entry is previous-active, and never the active one

use compose_ipc::FrameId;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MAX_COMPOSE_WINDOWS;
use crate::error::{HostError, HostResult};

/// One open compose window
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Frame of the window
    pub frame_id: FrameId,
    /// 1-based position in open sequence
    pub order: u32,
    /// Most recently focused window
    pub active: bool,
    /// Window that was active before the current one
    pub previous_active: bool,
}

/// Result of an open request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Registered with this order
    Opened {
        /// Assigned order
        order: u32,
    },
    /// The registry is full; nothing changed
    Rejected,
}

/// Open standalone compose windows of one host page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeRegistry {
    max_windows: usize,
    entries: Vec<RegistryEntry>,
}

impl Default for ComposeRegistry {
    fn default() -> Self {
        Self::new(MAX_COMPOSE_WINDOWS)
    }
}

impl ComposeRegistry {
    /// Empty registry holding at most `max_windows` windows
    pub fn new(max_windows: usize) -> Self {
        Self {
            max_windows,
            entries: Vec::new(),
        }
    }

    /// Capacity
    pub fn max_windows(&self) -> usize {
        self.max_windows
    }

    /// Entries sorted by order
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Number of open windows
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no window is open
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether another open would be rejected
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_windows
    }

    /// Look up a window
    pub fn get(&self, frame_id: &FrameId) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| &e.frame_id == frame_id)
    }

    /// Whether a window is registered
    pub fn contains(&self, frame_id: &FrameId) -> bool {
        self.get(frame_id).is_some()
    }

    /// The active window
    pub fn active(&self) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.active)
    }

    /// The window that was active before the current one
    pub fn previous_active(&self) -> Option<&RegistryEntry> {
        self.entries.iter().find(|e| e.previous_active)
    }

    /// Register a new window and make it active.
    ///
    /// When the registry is full the request is rejected and the open
    /// windows are left exactly as they were.
    pub fn open(&mut self, frame_id: FrameId) -> HostResult<OpenOutcome> {
        if self.contains(&frame_id) {
            return Err(HostError::DuplicateFrame(frame_id));
        }
        if self.is_full() {
            info!(%frame_id, open = self.len(), "compose window limit reached");
            return Ok(OpenOutcome::Rejected);
        }

        for entry in &mut self.entries {
            entry.previous_active = entry.active;
            entry.active = false;
        }

        let order = self.entries.len() as u32 + 1;
        info!(%frame_id, order, "compose window opened");
        self.entries.push(RegistryEntry {
            frame_id,
            order,
            active: true,
            previous_active: false,
        });
        Ok(OpenOutcome::Opened { order })
    }

    /// Make a window active, demoting the current one to previous-active.
    ///
    /// Returns whether anything changed; focusing the active window does not.
    pub fn focus(&mut self, frame_id: &FrameId) -> HostResult<bool> {
        let target = self
            .get(frame_id)
            .ok_or_else(|| HostError::FrameNotFound(frame_id.clone()))?;
        if target.active {
            debug!(%frame_id, "focus on active window");
            return Ok(false);
        }

        for entry in &mut self.entries {
            let is_target = &entry.frame_id == frame_id;
            entry.previous_active = !is_target && entry.active;
            entry.active = is_target;
        }
        Ok(true)
    }

    /// Remove a window and re-pack the remaining orders.
    ///
    /// Closing the active window promotes the previous-active one, or the
    /// highest-order window when there is none.
    pub fn close(&mut self, frame_id: &FrameId) -> HostResult<RegistryEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| &e.frame_id == frame_id)
            .ok_or_else(|| HostError::FrameNotFound(frame_id.clone()))?;
        let removed = self.entries.remove(index);

        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.order = i as u32 + 1;
        }

        if removed.active {
            let promoted = self
                .entries
                .iter()
                .position(|e| e.previous_active)
                .or_else(|| self.entries.len().checked_sub(1));
            if let Some(i) = promoted {
                let entry = &mut self.entries[i];
                entry.previous_active = false;
                entry.active = true;
                debug!(frame_id = %entry.frame_id, "promoted to active");
            }
        }

        info!(%frame_id, remaining = self.len(), "compose window closed");
        Ok(removed)
    }

    /// Whether every registry invariant holds
    pub fn is_consistent(&self) -> bool {
        if self.entries.len() > self.max_windows {
            return false;
        }
        let contiguous = self
            .entries
            .iter()
            .enumerate()
            .all(|(i, e)| e.order == i as u32 + 1);
        let active = self.entries.iter().filter(|e| e.active).count();
        let previous = self.entries.iter().filter(|e| e.previous_active).count();
        let overlap = self.entries.iter().any(|e| e.active && e.previous_active);
        let mut ids: Vec<&FrameId> = self.entries.iter().map(|e| &e.frame_id).collect();
        ids.sort();
        ids.dedup();

        contiguous
            && ids.len() == self.entries.len()
            && active == usize::from(!self.entries.is_empty())
            && previous <= 1
            && !overlap
    }

    /// Serialize the registry state as JSON
    pub fn snapshot(&self) -> HostResult<String> {
        serde_json::to_string(self).map_err(|e| HostError::InvalidSnapshot(e.to_string()))
    }

    /// Rebuild a registry from [`snapshot`](Self::snapshot) output
    pub fn restore(json: &str) -> HostResult<Self> {
        let registry: Self =
            serde_json::from_str(json).map_err(|e| HostError::InvalidSnapshot(e.to_string()))?;
        if !registry.is_consistent() {
            return Err(HostError::InvalidSnapshot(
                "registry invariants violated".to_string(),
            ));
        }
        Ok(registry)
    }

    /// Forget every window
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
