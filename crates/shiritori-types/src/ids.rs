use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;

/// Opaque identifier of a chat channel.
///
/// Platforms hand these out as strings (snowflakes, room ids, ...), so the
/// bot never interprets the contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ChannelId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of a single chat message, used as the target of reactions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Create a fresh MessageId using UUID v7 (time-sortable).
    ///
    /// Used by transports that do not receive ids from a remote platform.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_id_serializes_as_plain_string() {
        let id = ChannelId::new("1234567890");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1234567890\"");
    }

    #[test]
    fn test_channel_id_from_string() {
        let id = ChannelId::from("room".to_string());
        assert_eq!(id, ChannelId::new("room"));
        assert_eq!(id.to_string(), "room");
    }

    #[test]
    fn test_generated_message_ids_are_unique() {
        let a = MessageId::generate();
        let b = MessageId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }
}
