//! Feedback reducer.

use super::{FeedbackState, FeedbackStatus};
use crate::effects::UiEffect;
use crate::events::FeedbackUiEvent;

pub fn handle_feedback_event(feedback: &mut FeedbackState, event: FeedbackUiEvent) -> Vec<UiEffect> {
    match event {
        FeedbackUiEvent::NameChanged(text) => feedback.name.set(text),
        FeedbackUiEvent::EmailChanged(text) => feedback.email.set(text),
        FeedbackUiEvent::MessageChanged(text) => feedback.message.set(text),
        FeedbackUiEvent::Submit => {
            if !feedback.is_complete() {
                tracing::debug!("Feedback submit ignored: form incomplete");
                return vec![];
            }
            return vec![UiEffect::SubmitFeedback {
                request: feedback.snapshot(),
            }];
        }
        FeedbackUiEvent::Sent => {
            feedback.status = FeedbackStatus::Sent;
            feedback.reset();
        }
        FeedbackUiEvent::Failed => {
            feedback.status = FeedbackStatus::Error;
        }
    }
    vec![]
}
