//! Error types for the messaging protocol

use thiserror::Error;

/// Errors raised while encoding, decoding or sending protocol messages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IpcError {
    /// JSON encoding or decoding failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The channel to the parent tab is gone
    #[error("channel to tab {0} is closed")]
    ChannelClosed(String),

    /// The underlying transport refused the message
    #[error("message rejected by transport: {0}")]
    Rejected(String),

    /// A frame id that cannot be embedded in a selector
    #[error("invalid frame id: {0:?}")]
    InvalidFrameId(String),
}

impl From<serde_json::Error> for IpcError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for protocol operations
pub type IpcResult<T> = Result<T, IpcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IpcError::ChannelClosed("7".to_string());
        assert_eq!(err.to_string(), "channel to tab 7 is closed");

        let err = IpcError::Rejected("quota".to_string());
        assert_eq!(err.to_string(), "message rejected by transport: quota");

        let err = IpcError::InvalidFrameId("a,b".to_string());
        assert_eq!(err.to_string(), "invalid frame id: \"a,b\"");
    }

    #[test]
    fn test_from_serde_error() {
        let err: IpcError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, IpcError::Serialization(_)));
    }
}
