//! Effect handlers for the session runtime.
//!
//! Handlers are pure async functions that perform one service call and
//! return the resulting `UiEvent`. They never touch state; the controller
//! spawns them and feeds their result back through the inbox.

use std::sync::Arc;

use careerbuzz_core::api::{AnalyzeRequest, CareerApi, ChatRequest, FeedbackRequest};

use crate::events::{ChatUiEvent, DemoUiEvent, FeedbackUiEvent, UiEvent};

pub async fn analyze_skills(api: Arc<dyn CareerApi>, skills: Vec<String>) -> UiEvent {
    match api.analyze(AnalyzeRequest { skills }).await {
        Ok(body) => UiEvent::Demo(DemoUiEvent::Analyzed(body)),
        Err(err) => {
            tracing::warn!("Skills analysis failed: {err:#}");
            UiEvent::Demo(DemoUiEvent::AnalyzeFailed)
        }
    }
}

pub async fn submit_feedback(api: Arc<dyn CareerApi>, request: FeedbackRequest) -> UiEvent {
    match api.submit_feedback(request).await {
        Ok(()) => UiEvent::Feedback(FeedbackUiEvent::Sent),
        Err(err) => {
            tracing::warn!("Feedback submission failed: {err:#}");
            UiEvent::Feedback(FeedbackUiEvent::Failed)
        }
    }
}

pub async fn send_chat(api: Arc<dyn CareerApi>, message: String) -> UiEvent {
    match api.send_chat(ChatRequest { message }).await {
        Ok(reply) => UiEvent::Chat(ChatUiEvent::Replied { reply: reply.reply }),
        Err(err) => {
            tracing::warn!("Chat send failed: {err:#}");
            UiEvent::Chat(ChatUiEvent::Failed)
        }
    }
}
