//! Chat session slice: append-only message log plus the pending input.

mod render;
mod state;
mod update;

pub use render::render_chat_log;
pub use state::{
    CHAT_FAILURE_MESSAGE, CHAT_FALLBACK_REPLY, CHAT_GREETING, ChatMessage, ChatState, Sender,
};
pub use update::handle_chat_event;
