//! Contract with the remote CareerBuzz service.
//!
//! Sessions talk to the service only through `CareerApi`, so the runtime can
//! use the HTTP client while tests inject scripted fakes.

mod client;

use anyhow::Result;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use client::HttpCareerApi;

pub const ANALYZE_PATH: &str = "/api/analyze";
pub const FEEDBACK_PATH: &str = "/api/feedback";
pub const CHAT_SEND_PATH: &str = "/api/chat/send";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub skills: Vec<String>,
}

/// Feedback form payload. The wire name of the message field is `msg`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "msg")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

/// Outbound calls consumed by the landing sessions.
///
/// Every failure (transport, non-success status, undecodable body) is reported
/// as an error; callers map it to their own fixed message.
pub trait CareerApi: Send + Sync {
    /// Returns the analyze response body as-is.
    fn analyze(&self, request: AnalyzeRequest) -> BoxFuture<'_, Result<Value>>;

    /// Stores feedback. The acknowledgement body is ignored.
    fn submit_feedback(&self, request: FeedbackRequest) -> BoxFuture<'_, Result<()>>;

    fn send_chat(&self, request: ChatRequest) -> BoxFuture<'_, Result<ChatReply>>;
}
