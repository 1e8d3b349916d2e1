//! Chat Container Component
//!
//! The full chat interface for one session: header with session info,
//! error banner, message list, and a resizable input panel with model
//! selector and send/stop controls.
//!
//! All I/O belongs to the host. Send and interrupt go through the
//! [`SessionHandle`] and are awaited so the in-flight flags track the
//! real outcome; their failures are logged here and never re-thrown.
//! The running flag is derived from the message list on every change,
//! with a short-lived optimistic override around submit and stop.

use std::rc::Rc;

use dioxus::prelude::*;

use converse_core::{
    can_submit, enter_submits, resize_height, session_running, ChatMessage,
    PermissionDecision, SessionError, SessionHandle, DEFAULT_INPUT_HEIGHT,
};

use super::error_banner::SessionErrorBanner;
use super::message_view::MessageBubble;
use super::model_selector::ModelSelector;

/// Chat interface widget for a single conversational session.
#[component]
pub fn ChatContainer(
    /// Opaque session label shown in the header
    session_info: String,
    /// Ordered message list, owned by the host
    messages: ReadOnlySignal<Vec<ChatMessage>>,
    /// Host-reported session failure, toggles the error banner
    session_error: Option<SessionError>,
    /// The host's current model
    current_model: ReadOnlySignal<String>,
    /// Command channel to the session host
    handle: SessionHandle,
    /// Handler for the close-session button
    on_disconnect: EventHandler<()>,
    /// Handler for the error banner's retry button
    on_retry: EventHandler<()>,
    /// Handler for permission prompt decisions
    on_permission_respond: EventHandler<PermissionDecision>,
    /// Handler called when the user picks a different model
    on_model_change: EventHandler<String>,
) -> Element {
    let mut input = use_signal(String::new);
    let mut sending = use_signal(|| false);
    // IME composition in progress; Enter must not submit mid-composition.
    let mut composing = use_signal(|| false);
    let mut input_height = use_signal(|| DEFAULT_INPUT_HEIGHT);
    let mut resizing = use_signal(|| false);
    let mut panel_el = use_signal(|| None::<Rc<MountedData>>);

    // Running is a pure function of the message list. The override is
    // set optimistically at submit/stop time and dropped on the next
    // message-list change, so the derived value stays authoritative.
    let derived_running = use_memo(move || session_running(&messages.read()));
    let mut running_override = use_signal(|| None::<bool>);
    use_effect(move || {
        let _ = messages.read().len();
        running_override.set(None);
    });
    let running = move || running_override().unwrap_or_else(|| derived_running());

    let submit_handle = handle.clone();
    let submit = use_callback(move |_: ()| {
        let text = input();
        if !can_submit(&text, sending(), running()) {
            return;
        }
        sending.set(true);
        running_override.set(Some(true));
        let handle = submit_handle.clone();
        spawn(async move {
            match handle.send_message(text).await {
                Ok(()) => input.set(String::new()),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to send message");
                    running_override.set(None);
                }
            }
            sending.set(false);
        });
    });

    let stop_handle = handle.clone();
    let stop = use_callback(move |_: ()| {
        if !running() {
            return;
        }
        let handle = stop_handle.clone();
        spawn(async move {
            match handle.interrupt().await {
                Ok(()) => running_override.set(Some(false)),
                Err(e) => tracing::error!(error = %e, "Failed to stop"),
            }
        });
    });

    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter && enter_submits(e.modifiers().shift(), composing()) {
            e.prevent_default();
            submit.call(());
        }
    };

    // Height is measured from the panel's bottom edge up to the pointer;
    // out-of-range values are skipped rather than clamped.
    let handle_resize_move = move |e: MouseEvent| {
        let pointer_y = e.client_coordinates().y;
        let Some(panel) = panel_el() else {
            return;
        };
        spawn(async move {
            if let Ok(rect) = panel.get_client_rect().await {
                let panel_bottom = rect.origin.y + rect.size.height;
                if let Some(height) = resize_height(panel_bottom, pointer_y) {
                    input_height.set(height);
                }
            }
        });
    };

    let busy = sending() || running();
    let send_title = if sending() { "Sending..." } else { "Send message" };
    let placeholder = if running() {
        "Agent is running..."
    } else {
        "Type your message here... (Press Enter to send, Shift+Enter for new line)"
    };

    rsx! {
        div { class: "chat-container",
            // Header with session info and close button
            header { class: "chat-header",
                div { class: "session-info", "{session_info}" }
                button {
                    class: "btn-icon btn-close-session",
                    onclick: move |_| on_disconnect.call(()),
                    title: "Close session",
                    "×"
                }
            }

            if let Some(error) = session_error {
                SessionErrorBanner { error: error, on_retry: on_retry }
            }

            // Message list
            div { class: "messages",
                for message in messages() {
                    MessageBubble {
                        key: "{message.id}",
                        message: message.clone(),
                        on_permission_respond: on_permission_respond,
                    }
                }
                div { class: "scroll-anchor" }
            }

            // Input panel, resizable by dragging its top edge
            div {
                class: "input-area",
                style: "height: {input_height}px;",
                onmounted: move |e| panel_el.set(Some(e.data())),

                div {
                    class: "input-resize-handle",
                    onmousedown: move |e| {
                        e.prevent_default();
                        resizing.set(true);
                    },
                    title: "Drag to resize input area",
                    div { class: "resize-handle-bar" }
                }

                div { class: "input-toolbar",
                    ModelSelector {
                        current_model: current_model,
                        disabled: busy,
                        on_change: on_model_change,
                    }
                    if running() {
                        span { class: "running-indicator", "Running..." }
                    }
                }

                div { class: "input-controls",
                    textarea {
                        class: "chat-input-textarea",
                        value: "{input}",
                        placeholder: "{placeholder}",
                        disabled: busy,
                        oninput: move |e| input.set(e.value()),
                        onkeydown: handle_keydown,
                        oncompositionstart: move |_| composing.set(true),
                        oncompositionend: move |_| composing.set(false),
                    }
                    if running() {
                        button {
                            class: "btn-icon btn-stop",
                            onclick: move |_| stop.call(()),
                            title: "Stop current operation",
                            "■"
                        }
                    } else {
                        button {
                            class: "btn-icon btn-send",
                            onclick: move |_| submit.call(()),
                            disabled: sending() || input().trim().is_empty(),
                            title: "{send_title}",
                            if sending() { "…" } else { "➤" }
                        }
                    }
                }
            }

            // Drag overlay: exists only while resizing, so its listeners
            // and the cursor/selection override are torn down with it.
            if resizing() {
                div {
                    class: "resize-overlay",
                    onmousemove: handle_resize_move,
                    onmouseup: move |_| resizing.set(false),
                }
            }
        }
    }
}
