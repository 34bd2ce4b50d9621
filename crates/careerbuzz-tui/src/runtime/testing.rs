//! Scripted `CareerApi` for controller tests.
//!
//! Each call pops the next scripted outcome for its endpoint. A gated outcome
//! blocks until the test releases it, which lets tests pick the completion
//! order of overlapping requests.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use careerbuzz_core::api::{
    AnalyzeRequest, CareerApi, ChatReply, ChatRequest, FeedbackRequest,
};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use serde_json::Value;
use tokio::sync::oneshot;

pub type Outcome<T> = std::result::Result<T, String>;

enum Scripted<T> {
    Ready(Outcome<T>),
    Gated(oneshot::Receiver<Outcome<T>>),
}

struct Endpoint<Req, T> {
    calls: Mutex<Vec<Req>>,
    script: Mutex<VecDeque<Scripted<T>>>,
}

impl<Req, T> Default for Endpoint<Req, T> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            script: Mutex::new(VecDeque::new()),
        }
    }
}

impl<Req: Clone, T> Endpoint<Req, T> {
    fn push(&self, outcome: Outcome<T>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Ready(outcome));
    }

    fn gate(&self) -> oneshot::Sender<Outcome<T>> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().unwrap().push_back(Scripted::Gated(rx));
        tx
    }

    fn calls(&self) -> Vec<Req> {
        self.calls.lock().unwrap().clone()
    }

    async fn call(&self, request: Req) -> Result<T> {
        self.calls.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();
        let outcome = match next {
            Some(Scripted::Ready(outcome)) => outcome,
            Some(Scripted::Gated(rx)) => rx.await.unwrap_or_else(|_| Err("gate dropped".into())),
            None => Err("no scripted response".into()),
        };
        outcome.map_err(|msg| anyhow!(msg))
    }
}

#[derive(Default)]
pub struct FakeApi {
    analyze: Endpoint<AnalyzeRequest, Value>,
    feedback: Endpoint<FeedbackRequest, ()>,
    chat: Endpoint<ChatRequest, ChatReply>,
}

impl FakeApi {
    pub fn push_analyze(&self, outcome: Outcome<Value>) {
        self.analyze.push(outcome);
    }

    pub fn gate_analyze(&self) -> oneshot::Sender<Outcome<Value>> {
        self.analyze.gate()
    }

    pub fn analyze_calls(&self) -> Vec<AnalyzeRequest> {
        self.analyze.calls()
    }

    pub fn push_feedback(&self, outcome: Outcome<()>) {
        self.feedback.push(outcome);
    }

    pub fn feedback_calls(&self) -> Vec<FeedbackRequest> {
        self.feedback.calls()
    }

    pub fn push_chat(&self, outcome: Outcome<ChatReply>) {
        self.chat.push(outcome);
    }

    pub fn gate_chat(&self) -> oneshot::Sender<Outcome<ChatReply>> {
        self.chat.gate()
    }

    pub fn chat_calls(&self) -> Vec<ChatRequest> {
        self.chat.calls()
    }
}

impl CareerApi for FakeApi {
    fn analyze(&self, request: AnalyzeRequest) -> BoxFuture<'_, Result<Value>> {
        self.analyze.call(request).boxed()
    }

    fn submit_feedback(&self, request: FeedbackRequest) -> BoxFuture<'_, Result<()>> {
        self.feedback.call(request).boxed()
    }

    fn send_chat(&self, request: ChatRequest) -> BoxFuture<'_, Result<ChatReply>> {
        self.chat.call(request).boxed()
    }
}

pub fn reply(text: &str) -> Outcome<ChatReply> {
    Ok(ChatReply {
        reply: Some(text.to_string()),
    })
}
