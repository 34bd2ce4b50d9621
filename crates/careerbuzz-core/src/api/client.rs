use anyhow::{Context, Result, bail};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    ANALYZE_PATH, AnalyzeRequest, CHAT_SEND_PATH, CareerApi, ChatReply, ChatRequest,
    FEEDBACK_PATH, FeedbackRequest,
};
use crate::config::Config;

/// Standard User-Agent header for CareerBuzz API requests.
pub const USER_AGENT: &str = concat!("careerbuzz/", env!("CARGO_PKG_VERSION"));

/// HTTP implementation of `CareerApi` (JSON over POST).
#[derive(Debug, Clone)]
pub struct HttpCareerApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpCareerApi {
    /// Creates a client for `base_url` (no trailing slash expected).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Creates a client from the resolved config base URL.
    ///
    /// # Errors
    /// Returns an error if the configured URL is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.effective_api_base_url()?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<reqwest::Response> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            bail!("{path} returned {status}: {}", text.trim());
        }

        Ok(response)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.post(path, body)
            .await?
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode {path} response"))
    }
}

impl CareerApi for HttpCareerApi {
    fn analyze(&self, request: AnalyzeRequest) -> BoxFuture<'_, Result<Value>> {
        async move { self.post_json(ANALYZE_PATH, &request).await }.boxed()
    }

    fn submit_feedback(&self, request: FeedbackRequest) -> BoxFuture<'_, Result<()>> {
        async move {
            self.post(FEEDBACK_PATH, &request).await?;
            Ok(())
        }
        .boxed()
    }

    fn send_chat(&self, request: ChatRequest) -> BoxFuture<'_, Result<ChatReply>> {
        async move { self.post_json(CHAT_SEND_PATH, &request).await }.boxed()
    }
}
