use crate::common::TextField;

pub const CHAT_GREETING: &str = "Hi! I'm CareerBuzz assistant — how can I help?";
pub const CHAT_FALLBACK_REPLY: &str = "Thanks — we'll reply soon.";
pub const CHAT_FAILURE_MESSAGE: &str = "Failed to send message. Try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

#[derive(Debug)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    pub input: TextField,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::bot(CHAT_GREETING)],
            input: TextField::default(),
        }
    }
}

impl ChatState {
    /// Messages in append order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The log only grows; there is no way to edit or remove a message.
    pub(super) fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}
