//! Converse UI Components
//!
//! This crate provides the Dioxus components for a single chat session:
//! the [`ChatContainer`] widget (message list, resizable input panel,
//! model selector, send/stop/retry controls) and its pieces.
//!
//! The components own presentation and local interaction state only.
//! Transport, persistence, and permission handling stay with the host,
//! reached through a [`converse_core::SessionHandle`] and plain
//! `EventHandler` props.

pub mod components;

pub use components::*;
