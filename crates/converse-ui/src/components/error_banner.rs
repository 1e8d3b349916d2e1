//! Session Error Banner
//!
//! Shown when the host reports a session-level failure. Display only:
//! the banner shows the host's message and attempt count and offers a
//! retry button; the retry itself is the host's job.

use dioxus::prelude::*;

use converse_core::SessionError;

/// Error banner with a retry affordance.
#[component]
pub fn SessionErrorBanner(
    /// Host-supplied failure to display
    error: SessionError,
    /// Handler called when the user asks to retry the session
    on_retry: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "session-error-banner",
            span { class: "error-banner-icon", "⚠" }
            div { class: "error-banner-content",
                div { class: "error-banner-title", "Session Error" }
                div { class: "error-banner-message", "{error.message}" }
                div { class: "error-banner-details",
                    "Attempted {error.attempt_count} times without success."
                }
            }
            button {
                class: "btn-small error-banner-retry",
                onclick: move |_| on_retry.call(()),
                title: "Retry connecting to session",
                "Retry"
            }
        }
    }
}
