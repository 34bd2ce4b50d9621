//! Chat reducer.
//!
//! Sends are not serialized: every completion appends on its own, so replies
//! to overlapping sends land in completion order.

use super::{CHAT_FAILURE_MESSAGE, CHAT_FALLBACK_REPLY, ChatMessage, ChatState};
use crate::effects::UiEffect;
use crate::events::ChatUiEvent;

pub fn handle_chat_event(chat: &mut ChatState, event: ChatUiEvent) -> Vec<UiEffect> {
    match event {
        ChatUiEvent::InputChanged(text) => {
            chat.input.set(text);
            vec![]
        }
        ChatUiEvent::Send => {
            if chat.input.is_blank() {
                return vec![];
            }
            let message = chat.input.take();
            chat.push(ChatMessage::user(message.clone()));
            vec![UiEffect::SendChat { message }]
        }
        ChatUiEvent::Replied { reply } => {
            let text = reply
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| CHAT_FALLBACK_REPLY.to_string());
            chat.push(ChatMessage::bot(text));
            vec![]
        }
        ChatUiEvent::Failed => {
            chat.push(ChatMessage::bot(CHAT_FAILURE_MESSAGE));
            vec![]
        }
    }
}
