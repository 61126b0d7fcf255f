//! Identifier types shared by frames and the host page

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{IpcError, IpcResult};

/// Opaque identifier of one compose iframe.
///
/// Unique per window and embedded verbatim in container selectors
/// (`iframe#<frame_id>`). Ids from outside the process go through
/// [`FrameId::parse`], which only admits a letter or `_` followed by ASCII
/// letters, digits, `_` and `-`. Deserialization applies the same check.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FrameId(String);

impl FrameId {
    /// Create a frame id without checking it.
    ///
    /// For ids minted in-process; use [`FrameId::parse`] for anything
    /// received from a page or a message.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Create a frame id that is safe to embed in a selector
    pub fn parse(id: impl Into<String>) -> IpcResult<Self> {
        let id = id.into();
        let mut chars = id.chars();
        let head_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let tail_ok = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if head_ok && tail_ok {
            Ok(Self(id))
        } else {
            Err(IpcError::InvalidFrameId(id))
        }
    }

    /// Borrow the raw id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FrameId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(raw).map_err(serde::de::Error::custom)
    }
}

impl From<&str> for FrameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identifier of the browser tab hosting a compose window.
///
/// Every outbound message is routed by this id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Create a tab id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_id_display() {
        let id = FrameId::new("frame_abc");
        assert_eq!(id.to_string(), "frame_abc");
        assert_eq!(id.as_str(), "frame_abc");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let frame = FrameId::from("frame_1");
        assert_eq!(serde_json::to_string(&frame).unwrap(), "\"frame_1\"");

        let tab: TabId = serde_json::from_str("\"12:0\"").unwrap();
        assert_eq!(tab, TabId::from("12:0"));
    }

    #[test]
    fn test_parse_accepts_selector_safe_ids() {
        for raw in ["frame_1", "_x", "new-compose-2", "A"] {
            assert_eq!(FrameId::parse(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn test_parse_rejects_selector_breaking_ids() {
        for raw in ["", "a,b", "a\"b", "1abc", "-x", "a b", "a]b", "a#b", "ü"] {
            assert_eq!(
                FrameId::parse(raw),
                Err(IpcError::InvalidFrameId(raw.to_string())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_deserialize_rejects_invalid_frame_id() {
        assert!(serde_json::from_str::<FrameId>("\"x, iframe\"").is_err());
        let id: FrameId = serde_json::from_str("\"frame_2\"").unwrap();
        assert_eq!(id, FrameId::new("frame_2"));
    }
}
