//! Error types for the host page

use compose_ipc::{FrameId, TabId};
use thiserror::Error;

/// Errors that can occur in host-side window management.
///
/// Hitting the window cap is not an error; see
/// [`OpenOutcome::Rejected`](crate::OpenOutcome::Rejected).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// No registered window carries this frame id
    #[error("compose window not found: {0}")]
    FrameNotFound(FrameId),

    /// A window with this frame id is already open
    #[error("compose window already open: {0}")]
    DuplicateFrame(FrameId),

    /// Configuration could not be parsed
    #[error("invalid host configuration: {0}")]
    Config(String),

    /// Envelope addressed to another tab
    #[error("command for tab {got} delivered to tab {expected}")]
    WrongTab {
        /// Tab this page serves
        expected: TabId,
        /// Tab named in the envelope
        got: TabId,
    },

    /// Registry snapshot is malformed or violates registry invariants
    #[error("invalid registry snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type alias for host operations
pub type HostResult<T> = Result<T, HostError>;
