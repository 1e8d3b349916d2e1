//! Converse Core Library
//!
//! Framework-free model for a conversational session UI: message types,
//! the derived run state, the command channel a chat widget uses to talk
//! to its session host, the selectable model catalog, and the geometry
//! rules for the resizable input panel.
//!
//! ## Overview
//!
//! The UI layer never owns transport or persistence. It issues
//! [`SessionCommand`]s through a [`SessionHandle`] and folds the host's
//! [`SessionEvent`]s into its message list with [`apply_event`]. Every
//! derived flag (notably "is the assistant running") is recomputed from
//! the message list rather than stored, so it cannot drift.
//!
//! ## Quick Start
//!
//! ```ignore
//! use converse_core::{apply_event, session_running, SessionHandle};
//!
//! let (handle, mut commands) = SessionHandle::channel();
//!
//! // Host side: consume commands, emit events.
//! // UI side: await sends, derive the run flag.
//! handle.send_message("Hello!").await?;
//! let running = session_running(&messages);
//! ```

pub mod compose;
pub mod error;
pub mod message;
pub mod models;
pub mod panel;
pub mod session;

// Re-exports
pub use compose::{can_submit, enter_submits};
pub use error::{ChatError, ChatResult};
pub use message::{session_running, ChatMessage, PermissionRequest, Role};
pub use models::{available_models, DEFAULT_MODELS, MODELS_ENV_VAR};
pub use panel::{
    resize_height, DEFAULT_INPUT_HEIGHT, MAX_INPUT_HEIGHT, MIN_INPUT_HEIGHT,
};
pub use session::{
    apply_event, PermissionDecision, SessionCommand, SessionError, SessionEvent,
    SessionHandle,
};
