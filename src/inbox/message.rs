use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable input message: created once at load time, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Unique, stable identifier.
    pub id: String,
    /// Free-text sender label, may embed a display name and address.
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub timestamp: DateTime<Utc>,
}

impl RawMessage {
    /// The human-readable portion of the sender label.
    ///
    /// `"Alex Johnson <alex.j@example.com>"` yields `"Alex Johnson"`; a label
    /// with no address part is returned as-is.
    pub fn display_name(&self) -> &str {
        match self.sender.split_once('<') {
            Some((name, _)) if !name.trim().is_empty() => name.trim(),
            _ => self.sender.trim(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_from(sender: &str) -> RawMessage {
        RawMessage {
            id: "1".into(),
            sender: sender.into(),
            subject: "Subject".into(),
            body: "Body".into(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_display_name_strips_address() {
        let msg = message_from("Alex Johnson <alex.j@example.com>");
        assert_eq!(msg.display_name(), "Alex Johnson");
    }

    #[test]
    fn test_display_name_without_address() {
        let msg = message_from("Tech Weekly");
        assert_eq!(msg.display_name(), "Tech Weekly");
    }

    #[test]
    fn test_display_name_bare_address() {
        let msg = message_from("<no-reply@example.com>");
        assert_eq!(msg.display_name(), "<no-reply@example.com>");
    }

    #[test]
    fn test_timestamp_roundtrips_as_iso8601() {
        let msg = message_from("Someone <s@example.com>");
        let json = serde_json::to_string(&msg).unwrap();
        let parsed: RawMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.timestamp, msg.timestamp);
    }
}
