//! Session command and event protocol
//!
//! The chat widget never performs I/O. It issues [`SessionCommand`]s
//! through a [`SessionHandle`] and the host answers with
//! [`SessionEvent`]s that the shell folds into its message list via
//! [`apply_event`].
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  UI Layer (converse-ui)                                    │
//! │  - SessionHandle: issues commands, awaits send/interrupt   │
//! ├────────────────────────────────────────────────────────────┤
//! │  Shell (converse-desktop)                                  │
//! │  - event pump: SessionEvent -> message list / error signal │
//! ├────────────────────────────────────────────────────────────┤
//! │  Host (out of scope: transport, persistence)               │
//! │  - consumes SessionCommand, emits SessionEvent             │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Send and interrupt carry reply channels because the widget awaits
//! their outcome to drive its sending flag; everything else is
//! fire-and-forget.

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};

use crate::error::{ChatError, ChatResult};
use crate::message::ChatMessage;

/// Host-reported session failure, shown in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionError {
    /// Human-readable description of what went wrong
    pub message: String,
    /// How many times the host has retried without success
    pub attempt_count: u32,
}

impl SessionError {
    pub fn new(message: impl Into<String>, attempt_count: u32) -> Self {
        Self {
            message: message.into(),
            attempt_count,
        }
    }
}

/// A user's answer to a [`PermissionRequest`] surfaced by a message.
///
/// [`PermissionRequest`]: crate::message::PermissionRequest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionDecision {
    /// Identifier of the request being answered
    pub request_id: String,
    /// Whether the user approved it
    pub approved: bool,
}

/// Commands the UI sends to its session host.
#[derive(Debug)]
pub enum SessionCommand {
    /// Send a user message; the host replies once accepted or failed
    SendMessage {
        content: String,
        reply: oneshot::Sender<ChatResult<()>>,
    },
    /// Stop the running assistant turn. Advisory: the host decides what
    /// stopping means.
    Interrupt {
        reply: oneshot::Sender<ChatResult<()>>,
    },
    /// Close the session
    Disconnect,
    /// Drop the conversation history
    ClearHistory,
    /// Answer a permission request raised by an assistant message
    PermissionResponse { request_id: String, approved: bool },
    /// Retry establishing the session after a failure
    Retry,
    /// Switch the session to a different model
    SetModel(String),
}

/// Notifications the host pushes back to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// A new message was added to the conversation
    MessageAppended(ChatMessage),
    /// More text arrived for a streaming message
    MessageDelta { id: String, text: String },
    /// A streaming message finished
    MessageCompleted { id: String },
    /// The session entered a failed state
    Failure(SessionError),
    /// A previous failure was resolved
    FailureCleared,
    /// The active model changed (confirmation of SetModel, or an
    /// external change the UI must resynchronize to)
    ModelChanged(String),
}

/// Cheap-to-clone handle the widget uses to reach its session host.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<SessionCommand>,
}

// Handles live in component props; two handles are equal when they feed
// the same host.
impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.tx.same_channel(&other.tx)
    }
}

impl SessionHandle {
    /// Create a handle and the command stream the host consumes.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Send a user message and wait for the host to accept it.
    pub async fn send_message(&self, content: impl Into<String>) -> ChatResult<()> {
        let (reply, result) = oneshot::channel();
        self.tx
            .send(SessionCommand::SendMessage {
                content: content.into(),
                reply,
            })
            .map_err(|_| ChatError::SessionClosed)?;
        result.await.map_err(|_| ChatError::SessionClosed)?
    }

    /// Ask the host to stop the running turn and wait for the outcome.
    pub async fn interrupt(&self) -> ChatResult<()> {
        let (reply, result) = oneshot::channel();
        self.tx
            .send(SessionCommand::Interrupt { reply })
            .map_err(|_| ChatError::SessionClosed)?;
        result.await.map_err(|_| ChatError::SessionClosed)?
    }

    /// Close the session.
    pub fn disconnect(&self) -> ChatResult<()> {
        self.fire(SessionCommand::Disconnect)
    }

    /// Drop the conversation history.
    pub fn clear_history(&self) -> ChatResult<()> {
        self.fire(SessionCommand::ClearHistory)
    }

    /// Answer a permission request.
    pub fn permission_response(
        &self,
        request_id: impl Into<String>,
        approved: bool,
    ) -> ChatResult<()> {
        self.fire(SessionCommand::PermissionResponse {
            request_id: request_id.into(),
            approved,
        })
    }

    /// Retry establishing the session after a failure.
    pub fn retry(&self) -> ChatResult<()> {
        self.fire(SessionCommand::Retry)
    }

    /// Switch the session to a different model.
    pub fn set_model(&self, model: impl Into<String>) -> ChatResult<()> {
        self.fire(SessionCommand::SetModel(model.into()))
    }

    fn fire(&self, command: SessionCommand) -> ChatResult<()> {
        self.tx.send(command).map_err(|_| ChatError::SessionClosed)
    }
}

/// Fold a message-bearing event into the ordered message list.
///
/// The list is append-only: appended messages land at the tail, deltas
/// extend the message they name, completions clear its streaming flag.
/// Events that do not touch the list (failures, model changes) are
/// ignored here; the shell routes those to its own state.
pub fn apply_event(messages: &mut Vec<ChatMessage>, event: SessionEvent) {
    match event {
        SessionEvent::MessageAppended(message) => messages.push(message),
        SessionEvent::MessageDelta { id, text } => {
            if let Some(message) = messages.iter_mut().rev().find(|m| m.id == id) {
                message.content.push_str(&text);
            } else {
                tracing::warn!(id = %id, "Delta for unknown message dropped");
            }
        }
        SessionEvent::MessageCompleted { id } => {
            if let Some(message) = messages.iter_mut().rev().find(|m| m.id == id) {
                message.streaming = false;
            } else {
                tracing::warn!(id = %id, "Completion for unknown message dropped");
            }
        }
        SessionEvent::Failure(_)
        | SessionEvent::FailureCleared
        | SessionEvent::ModelChanged(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{session_running, Role};

    fn streaming_assistant(id: &str) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            role: Role::Assistant,
            content: String::new(),
            timestamp: 0,
            streaming: true,
            permission: None,
        }
    }

    #[test]
    fn test_append_then_delta_then_complete() {
        let mut messages = Vec::new();

        apply_event(
            &mut messages,
            SessionEvent::MessageAppended(streaming_assistant("a1")),
        );
        assert!(session_running(&messages));

        apply_event(
            &mut messages,
            SessionEvent::MessageDelta {
                id: "a1".to_string(),
                text: "Hel".to_string(),
            },
        );
        apply_event(
            &mut messages,
            SessionEvent::MessageDelta {
                id: "a1".to_string(),
                text: "lo".to_string(),
            },
        );
        assert_eq!(messages[0].content, "Hello");
        assert!(session_running(&messages));

        apply_event(
            &mut messages,
            SessionEvent::MessageCompleted {
                id: "a1".to_string(),
            },
        );
        assert!(!messages[0].streaming);
        assert!(!session_running(&messages));
    }

    #[test]
    fn test_delta_for_unknown_id_is_dropped() {
        let mut messages = vec![streaming_assistant("a1")];
        apply_event(
            &mut messages,
            SessionEvent::MessageDelta {
                id: "nope".to_string(),
                text: "x".to_string(),
            },
        );
        assert_eq!(messages.len(), 1);
        assert!(messages[0].content.is_empty());
    }

    #[test]
    fn test_non_message_events_leave_list_untouched() {
        let mut messages = vec![streaming_assistant("a1")];
        apply_event(
            &mut messages,
            SessionEvent::Failure(SessionError::new("boom", 3)),
        );
        apply_event(&mut messages, SessionEvent::FailureCleared);
        apply_event(
            &mut messages,
            SessionEvent::ModelChanged("m".to_string()),
        );
        assert_eq!(messages.len(), 1);
        assert!(messages[0].streaming);
    }

    #[tokio::test]
    async fn test_send_message_round_trip() {
        let (handle, mut commands) = SessionHandle::channel();

        let host = tokio::spawn(async move {
            match commands.recv().await {
                Some(SessionCommand::SendMessage { content, reply }) => {
                    assert_eq!(content, "hello");
                    reply.send(Ok(())).ok();
                }
                other => panic!("unexpected command: {:?}", other),
            }
        });

        handle.send_message("hello").await.unwrap();
        host.await.unwrap();
    }

    #[tokio::test]
    async fn test_send_failure_is_reported() {
        let (handle, mut commands) = SessionHandle::channel();

        tokio::spawn(async move {
            if let Some(SessionCommand::SendMessage { reply, .. }) = commands.recv().await {
                reply
                    .send(Err(ChatError::SendFailed("backend down".to_string())))
                    .ok();
            }
        });

        let err = handle.send_message("hi").await.unwrap_err();
        assert!(matches!(err, ChatError::SendFailed(_)));
    }

    #[tokio::test]
    async fn test_closed_host_yields_session_closed() {
        let (handle, commands) = SessionHandle::channel();
        drop(commands);

        let err = handle.send_message("hi").await.unwrap_err();
        assert!(matches!(err, ChatError::SessionClosed));
        assert!(matches!(handle.retry(), Err(ChatError::SessionClosed)));
    }

    #[tokio::test]
    async fn test_interrupt_round_trip() {
        let (handle, mut commands) = SessionHandle::channel();

        tokio::spawn(async move {
            if let Some(SessionCommand::Interrupt { reply }) = commands.recv().await {
                reply.send(Ok(())).ok();
            }
        });

        handle.interrupt().await.unwrap();
    }

    #[test]
    fn test_handle_equality_tracks_channel() {
        let (a, _rx_a) = SessionHandle::channel();
        let (b, _rx_b) = SessionHandle::channel();
        let a2 = a.clone();
        assert_eq!(a, a2);
        assert_ne!(a, b);
    }
}
