//! Chat message types for display
//!
//! This module provides the [`ChatMessage`] struct which represents a
//! display-ready message in a conversational session, plus the derived
//! run-state check [`session_running`].

use serde::{Deserialize, Serialize};

/// Who produced a message.
///
/// Hosts may forward roles this UI does not know about (tool output,
/// system banners); those deserialize as [`Role::Other`] and render
/// without bubble alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message typed by the person at the keyboard
    User,
    /// Message produced by the assistant
    Assistant,
    /// Anything else the host forwards
    #[serde(other)]
    Other,
}

/// A display-ready chat message.
///
/// The message list is owned by the host and append-only from the UI's
/// perspective; the UI never mutates messages it is handed.
///
/// # Example
///
/// ```ignore
/// let message = ChatMessage {
///     id: "01J9ZK3V9W".to_string(),
///     role: Role::Assistant,
///     content: "Hello!".to_string(),
///     timestamp: 1705123456789,
///     streaming: true,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier assigned by the host
    pub id: String,
    /// Who produced this message
    pub role: Role,
    /// Message content (markdown for assistant messages)
    pub content: String,
    /// Unix timestamp in milliseconds when the message was created
    pub timestamp: i64,
    /// Whether the message is still being produced by the assistant
    #[serde(default)]
    pub streaming: bool,
    /// Pending permission request attached to this message, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<PermissionRequest>,
}

/// A tool-use permission request the host attached to a message.
///
/// The UI only displays it and reports the decision back; granting or
/// denying is entirely the host's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRequest {
    /// Identifier the host expects back with the decision
    pub id: String,
    /// What the assistant is asking to do
    pub description: String,
}

impl ChatMessage {
    /// Create a new message with a fresh ULID and the current time.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            streaming: false,
            permission: None,
        }
    }

    /// Create a message that is still streaming.
    pub fn streaming(role: Role, content: impl Into<String>) -> Self {
        Self {
            streaming: true,
            ..Self::new(role, content)
        }
    }

    /// Label used above the bubble.
    pub fn display_role(&self) -> &'static str {
        match self.role {
            Role::User => "you",
            Role::Assistant => "assistant",
            Role::Other => "system",
        }
    }

    /// Format the timestamp as a relative time string.
    ///
    /// Returns strings like "Just now", "5m ago", "2h ago", etc.
    pub fn relative_time(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let diff_secs = (now - self.timestamp) / 1000;

        if diff_secs < 60 {
            "Just now".to_string()
        } else if diff_secs < 3600 {
            format!("{}m ago", diff_secs / 60)
        } else if diff_secs < 86400 {
            format!("{}h ago", diff_secs / 3600)
        } else {
            format!("{}d ago", diff_secs / 86400)
        }
    }
}

/// Whether the assistant is currently responding.
///
/// True iff the most recent message has role [`Role::Assistant`] and its
/// streaming flag set. This is the single source of truth for the UI's
/// running flag; callers recompute it on every message-list change
/// instead of storing it.
pub fn session_running(messages: &[ChatMessage]) -> bool {
    matches!(
        messages.last(),
        Some(last) if last.role == Role::Assistant && last.streaming
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(role: Role, streaming: bool) -> ChatMessage {
        ChatMessage {
            id: "m".to_string(),
            role,
            content: "hi".to_string(),
            timestamp: 0,
            streaming,
            permission: None,
        }
    }

    #[test]
    fn test_running_requires_streaming_assistant_tail() {
        assert!(session_running(&[msg(Role::Assistant, true)]));
        assert!(session_running(&[
            msg(Role::User, false),
            msg(Role::Assistant, true)
        ]));
    }

    #[test]
    fn test_not_running_on_empty_list() {
        assert!(!session_running(&[]));
    }

    #[test]
    fn test_not_running_when_tail_finished() {
        assert!(!session_running(&[msg(Role::Assistant, false)]));
    }

    #[test]
    fn test_not_running_when_tail_is_user() {
        // A streaming flag on a non-assistant tail must not count.
        assert!(!session_running(&[
            msg(Role::Assistant, true),
            msg(Role::User, true)
        ]));
    }

    #[test]
    fn test_role_deserializes_unknown_as_other() {
        let role: Role = serde_json::from_str("\"tool_result\"").unwrap();
        assert_eq!(role, Role::Other);
    }

    #[test]
    fn test_role_roundtrip() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_streaming_defaults_false() {
        let json = r#"{"id":"1","role":"user","content":"hi","timestamp":0}"#;
        let m: ChatMessage = serde_json::from_str(json).unwrap();
        assert!(!m.streaming);
    }

    #[test]
    fn test_display_role() {
        assert_eq!(msg(Role::User, false).display_role(), "you");
        assert_eq!(msg(Role::Assistant, false).display_role(), "assistant");
        assert_eq!(msg(Role::Other, false).display_role(), "system");
    }
}
