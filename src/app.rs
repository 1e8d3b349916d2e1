use dioxus::prelude::*;

use converse_core::{apply_event, ChatMessage, PermissionDecision, SessionError, SessionEvent};
use converse_ui::ChatContainer;

use crate::host::{spawn_loopback, LocalSession};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the session state the chat widget renders (message list,
/// current model, session error), pumps host events into it, and wires
/// the widget's callbacks back onto the command channel.
#[component]
pub fn App() -> Element {
    let mut messages: Signal<Vec<ChatMessage>> = use_signal(Vec::new);
    let mut session_error: Signal<Option<SessionError>> = use_signal(|| None);
    let mut current_model: Signal<String> = use_signal(crate::initial_model);

    // One session host for the window's lifetime, plus the event pump
    // that folds its notifications into the signals above.
    let (handle, label) = use_hook(|| {
        let LocalSession {
            handle,
            mut events,
            label,
        } = spawn_loopback(crate::initial_model());

        spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    SessionEvent::Failure(error) => session_error.set(Some(error)),
                    SessionEvent::FailureCleared => session_error.set(None),
                    SessionEvent::ModelChanged(model) => current_model.set(model),
                    other => messages.with_mut(|list| apply_event(list, other)),
                }
            }
            tracing::info!("Session host closed the event stream");
        });

        (handle, label)
    });

    // Context so future nested components can reach the host without
    // prop-drilling; the widget itself takes the handle as a prop.
    let handle = use_context_provider(|| handle);

    let disconnect_handle = handle.clone();
    let retry_handle = handle.clone();
    let permission_handle = handle.clone();
    let model_handle = handle.clone();

    rsx! {
        style { {GLOBAL_STYLES} }
        ChatContainer {
            session_info: label.clone(),
            messages: messages,
            session_error: session_error(),
            current_model: current_model,
            handle: handle.clone(),
            on_disconnect: move |_| {
                if let Err(e) = disconnect_handle.disconnect() {
                    tracing::warn!(error = %e, "Disconnect failed");
                }
            },
            on_retry: move |_| {
                if let Err(e) = retry_handle.retry() {
                    tracing::warn!(error = %e, "Retry failed");
                }
            },
            on_permission_respond: move |decision: PermissionDecision| {
                if let Err(e) = permission_handle
                    .permission_response(decision.request_id, decision.approved)
                {
                    tracing::warn!(error = %e, "Permission response failed");
                }
            },
            on_model_change: move |model: String| {
                if let Err(e) = model_handle.set_model(model) {
                    tracing::warn!(error = %e, "Model change failed");
                }
            },
        }
    }
}
