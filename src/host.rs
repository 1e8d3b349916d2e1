//! Loopback session host
//!
//! Transport is the embedding application's business; the desktop shell
//! still needs something on the far side of the command channel to run.
//! This host lives in-process: it echoes user messages into the
//! conversation and streams a canned assistant reply word by word,
//! honoring interrupts mid-stream.

use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use converse_core::{
    ChatError, ChatMessage, Role, SessionCommand, SessionEvent, SessionHandle,
};

/// Milliseconds between streamed words.
const STREAM_TICK_MS: u64 = 80;

/// A running in-process session.
pub struct LocalSession {
    /// Command channel for the chat widget
    pub handle: SessionHandle,
    /// Host notifications for the shell's event pump
    pub events: mpsc::UnboundedReceiver<SessionEvent>,
    /// Label shown in the chat header
    pub label: String,
}

/// Spawn the loopback host on the current tokio runtime.
pub fn spawn_loopback(initial_model: String) -> LocalSession {
    let (handle, commands) = SessionHandle::channel();
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let label = format!("Local session · {}", initial_model);

    tokio::spawn(run(commands, events_tx, initial_model));

    LocalSession {
        handle,
        events: events_rx,
        label,
    }
}

async fn run(
    mut commands: mpsc::UnboundedReceiver<SessionCommand>,
    events: mpsc::UnboundedSender<SessionEvent>,
    mut model: String,
) {
    while let Some(command) = commands.recv().await {
        match command {
            SessionCommand::SendMessage { content, reply } => {
                let user = ChatMessage::new(Role::User, content.clone());
                events.send(SessionEvent::MessageAppended(user)).ok();
                reply.send(Ok(())).ok();

                if !stream_reply(&mut commands, &events, &model, &content).await {
                    break;
                }
            }
            SessionCommand::Interrupt { reply } => {
                // Nothing is running between turns; stopping succeeds trivially.
                reply.send(Ok(())).ok();
            }
            SessionCommand::Disconnect => {
                tracing::info!("Session disconnected");
                break;
            }
            SessionCommand::ClearHistory => {
                // The shell owns the visible list; nothing is persisted here.
            }
            SessionCommand::PermissionResponse {
                request_id,
                approved,
            } => {
                tracing::info!(request_id = %request_id, approved, "Permission decision recorded");
            }
            SessionCommand::Retry => {
                events.send(SessionEvent::FailureCleared).ok();
            }
            SessionCommand::SetModel(new_model) => {
                model = new_model.clone();
                events.send(SessionEvent::ModelChanged(new_model)).ok();
            }
        }
    }
}

/// Stream the assistant reply for one turn.
///
/// Keeps draining the command channel so an interrupt can cut the turn
/// short. Returns false when the session should shut down.
async fn stream_reply(
    commands: &mut mpsc::UnboundedReceiver<SessionCommand>,
    events: &mpsc::UnboundedSender<SessionEvent>,
    model: &str,
    prompt: &str,
) -> bool {
    let message = ChatMessage::streaming(Role::Assistant, "");
    let id = message.id.clone();
    events.send(SessionEvent::MessageAppended(message)).ok();

    let text = format!(
        "You said: \"{}\". This loopback session ({}) has no transport behind it; \
         wire a real host into the command channel to talk to an assistant.",
        prompt.trim(),
        model
    );
    let mut words = text
        .split_inclusive(' ')
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into_iter();

    let mut ticker = interval(Duration::from_millis(STREAM_TICK_MS));
    let keep_running = loop {
        tokio::select! {
            _ = ticker.tick() => {
                match words.next() {
                    Some(word) => {
                        events
                            .send(SessionEvent::MessageDelta { id: id.clone(), text: word })
                            .ok();
                    }
                    None => break true,
                }
            }
            command = commands.recv() => match command {
                Some(SessionCommand::Interrupt { reply }) => {
                    reply.send(Ok(())).ok();
                    break true;
                }
                Some(SessionCommand::SendMessage { reply, .. }) => {
                    reply
                        .send(Err(ChatError::SendFailed(
                            "a turn is already running".to_string(),
                        )))
                        .ok();
                }
                Some(SessionCommand::Disconnect) => break false,
                Some(other) => {
                    tracing::debug!(?other, "Command ignored while a turn is streaming");
                }
                None => break true,
            }
        }
    };

    events.send(SessionEvent::MessageCompleted { id }).ok();
    keep_running
}

#[cfg(test)]
mod tests {
    use super::*;
    use converse_core::{apply_event, session_running};

    /// Drain events into a message list until the current turn completes.
    async fn drain_turn(
        events: &mut mpsc::UnboundedReceiver<SessionEvent>,
        messages: &mut Vec<ChatMessage>,
    ) {
        loop {
            let event = events.recv().await.expect("host closed event stream");
            let done = matches!(event, SessionEvent::MessageCompleted { .. });
            apply_event(messages, event);
            if done {
                break;
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_streams_echo_reply() {
        let mut session = spawn_loopback("test-model".to_string());
        session.handle.send_message("hello there").await.unwrap();

        let mut messages = Vec::new();
        drain_turn(&mut session.events, &mut messages).await;

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "hello there");
        assert_eq!(messages[1].role, Role::Assistant);
        assert!(!messages[1].streaming);
        assert!(messages[1].content.contains("hello there"));
        assert!(messages[1].content.contains("test-model"));
        assert!(!session_running(&messages));
    }

    #[tokio::test(start_paused = true)]
    async fn test_running_while_streaming() {
        let mut session = spawn_loopback("test-model".to_string());
        session.handle.send_message("hi").await.unwrap();

        let mut messages = Vec::new();
        // User message, then the streaming assistant tail appears.
        loop {
            let event = session.events.recv().await.unwrap();
            let streaming_started =
                matches!(event, SessionEvent::MessageAppended(ref m) if m.role == Role::Assistant);
            apply_event(&mut messages, event);
            if streaming_started {
                break;
            }
        }
        assert!(session_running(&messages));

        drain_turn(&mut session.events, &mut messages).await;
        assert!(!session_running(&messages));
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_cuts_stream_short() {
        let mut session = spawn_loopback("test-model".to_string());
        session.handle.send_message("hi").await.unwrap();

        let mut messages = Vec::new();
        // Wait for the first delta so the turn is demonstrably running.
        loop {
            let event = session.events.recv().await.unwrap();
            let was_delta = matches!(event, SessionEvent::MessageDelta { .. });
            apply_event(&mut messages, event);
            if was_delta {
                break;
            }
        }

        session.handle.interrupt().await.unwrap();
        drain_turn(&mut session.events, &mut messages).await;

        let tail = messages.last().unwrap();
        assert_eq!(tail.role, Role::Assistant);
        assert!(!tail.streaming);
        // The canned reply was cut off before its closing words.
        assert!(!tail.content.contains("assistant."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_model_confirms() {
        let mut session = spawn_loopback("m1".to_string());
        session.handle.set_model("m2").unwrap();

        let event = session.events.recv().await.unwrap();
        assert_eq!(event, SessionEvent::ModelChanged("m2".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_clears_failure() {
        let mut session = spawn_loopback("m1".to_string());
        session.handle.retry().unwrap();

        let event = session.events.recv().await.unwrap();
        assert_eq!(event, SessionEvent::FailureCleared);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_closes_session() {
        let session = spawn_loopback("m1".to_string());
        session.handle.disconnect().unwrap();

        let err = session.handle.send_message("hi").await.unwrap_err();
        assert!(matches!(err, ChatError::SessionClosed));
    }
}
