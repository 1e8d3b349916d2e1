//! Message Bubble Component
//!
//! Chat-style message bubbles with visual distinction between user and
//! assistant messages, markdown rendering for assistant content, a
//! streaming indicator, and an inline permission prompt when the host
//! attaches a request to a message.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use converse_core::{ChatMessage, PermissionDecision, Role};

/// Convert assistant markdown to HTML for display.
fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// CSS row class for a message's role.
fn row_class(role: Role) -> &'static str {
    match role {
        Role::User => "message-row message-row-sent",
        Role::Assistant => "message-row message-row-received",
        Role::Other => "message-row message-row-system",
    }
}

/// CSS bubble class for a message's role.
fn bubble_class(role: Role) -> &'static str {
    match role {
        Role::User => "message-bubble message-bubble-sent",
        Role::Assistant => "message-bubble message-bubble-received",
        Role::Other => "message-bubble message-bubble-system",
    }
}

/// Individual message bubble.
#[component]
pub fn MessageBubble(
    /// The message to render
    message: ChatMessage,
    /// Handler called when the user answers a permission prompt
    on_permission_respond: EventHandler<PermissionDecision>,
) -> Element {
    let is_assistant = message.role == Role::Assistant;
    let assistant_html = is_assistant.then(|| render_markdown(&message.content));

    rsx! {
        div { class: "{row_class(message.role)}",
            div { class: "{bubble_class(message.role)}",
                div { class: "message-bubble-sender", "{message.display_role()}" }

                if let Some(html) = assistant_html {
                    div {
                        class: "message-bubble-content message-markdown",
                        dangerous_inner_html: "{html}",
                    }
                } else {
                    div { class: "message-bubble-content", "{message.content}" }
                }

                if message.streaming {
                    div { class: "streaming-indicator",
                        span { class: "streaming-dot" }
                        span { class: "streaming-dot" }
                        span { class: "streaming-dot" }
                    }
                }

                if let Some(ref request) = message.permission {
                    PermissionPrompt {
                        request_id: request.id.clone(),
                        description: request.description.clone(),
                        on_respond: on_permission_respond,
                    }
                }

                div { class: "message-bubble-time", "{message.relative_time()}" }
            }
        }
    }
}

/// Inline approve/deny prompt for a permission request.
#[component]
fn PermissionPrompt(
    request_id: String,
    description: String,
    on_respond: EventHandler<PermissionDecision>,
) -> Element {
    let approve_id = request_id.clone();
    let deny_id = request_id;

    rsx! {
        div { class: "permission-prompt",
            p { class: "permission-description", "{description}" }
            div { class: "permission-actions",
                button {
                    class: "btn-small permission-approve",
                    onclick: move |_| on_respond.call(PermissionDecision {
                        request_id: approve_id.clone(),
                        approved: true,
                    }),
                    "Allow"
                }
                button {
                    class: "btn-small btn-cancel permission-deny",
                    onclick: move |_| on_respond.call(PermissionDecision {
                        request_id: deny_id.clone(),
                        approved: false,
                    }),
                    "Deny"
                }
            }
        }
    }
}
