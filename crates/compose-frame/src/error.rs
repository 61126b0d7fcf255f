//! Error types for the compose frame chrome

use thiserror::Error;

/// Errors that can occur in frame-side chrome operations.
///
/// Layout work never fails: missing elements measure as zero and dropped
/// messages leave a stale size. Only misuse and bad configuration surface here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChromeError {
    /// Minimize/maximize requested on an inline reply box
    #[error("'{0}' is only available on standalone compose windows")]
    UnsupportedForReplyBox(&'static str),

    /// Configuration could not be parsed
    #[error("invalid frame configuration: {0}")]
    Config(String),
}

/// Result type alias for frame operations
pub type ChromeResult<T> = Result<T, ChromeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChromeError::UnsupportedForReplyBox("toggle_minimize");
        assert_eq!(
            err.to_string(),
            "'toggle_minimize' is only available on standalone compose windows"
        );

        let err = ChromeError::Config("expected number".to_string());
        assert_eq!(
            err.to_string(),
            "invalid frame configuration: expected number"
        );
    }
}
