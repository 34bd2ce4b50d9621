use careerbuzz_core::api::FeedbackRequest;

use crate::common::TextField;

pub const FEEDBACK_SENT_MESSAGE: &str = "Thanks — we received your feedback.";
pub const FEEDBACK_FAILED_MESSAGE: &str = "Failed to send. Try later.";

/// Outcome of the last submission. Advisory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackStatus {
    #[default]
    NotSent,
    Sent,
    Error,
}

impl FeedbackStatus {
    pub fn message(self) -> Option<&'static str> {
        match self {
            FeedbackStatus::NotSent => None,
            FeedbackStatus::Sent => Some(FEEDBACK_SENT_MESSAGE),
            FeedbackStatus::Error => Some(FEEDBACK_FAILED_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Default)]
pub struct FeedbackState {
    pub name: TextField,
    pub email: TextField,
    pub message: TextField,
    pub status: FeedbackStatus,
}

impl FeedbackState {
    pub fn field_mut(&mut self, field: FeedbackField) -> &mut TextField {
        match field {
            FeedbackField::Name => &mut self.name,
            FeedbackField::Email => &mut self.email,
            FeedbackField::Message => &mut self.message,
        }
    }

    /// True when every field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        !self.name.is_blank() && !self.email.is_blank() && !self.message.is_blank()
    }

    pub fn snapshot(&self) -> FeedbackRequest {
        FeedbackRequest {
            name: self.name.text().to_string(),
            email: self.email.text().to_string(),
            message: self.message.text().to_string(),
        }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}
