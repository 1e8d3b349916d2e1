//! Chat interface components.

mod chat_container;
mod error_banner;
mod message_view;
mod model_selector;

pub use chat_container::ChatContainer;
pub use error_banner::SessionErrorBanner;
pub use message_view::MessageBubble;
pub use model_selector::ModelSelector;
