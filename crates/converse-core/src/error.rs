//! Error types for Converse

use thiserror::Error;

/// Main error type for session operations issued from the UI
#[derive(Error, Debug)]
pub enum ChatError {
    /// The session host hung up its command channel
    #[error("Session closed")]
    SessionClosed,

    /// The host rejected or failed a send
    #[error("Send failed: {0}")]
    SendFailed(String),

    /// The host failed to interrupt the running turn
    #[error("Interrupt failed: {0}")]
    InterruptFailed(String),

    /// Model identifier not present in the catalog
    #[error("Unknown model: {0}")]
    InvalidModel(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using ChatError
pub type ChatResult<T> = Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChatError::SendFailed("backend unreachable".to_string());
        assert_eq!(format!("{}", err), "Send failed: backend unreachable");
    }

    #[test]
    fn test_session_closed_display() {
        assert_eq!(format!("{}", ChatError::SessionClosed), "Session closed");
    }
}
