//! UI event types.
//!
//! All external inputs (terminal, async results, intents from the headless
//! controller) are converted to `UiEvent` before being processed by the
//! reducer.
//!
//! ## Inbox Pattern
//!
//! Async operations send their result events directly to the runtime inbox.
//! Results arrive as separate events and are applied in arrival order.
//!
//! ## Task Lifecycle
//!
//! Single-flight work (the demo analysis) is wrapped in
//! `UiEvent::TaskCompleted`. The reducer marks the task active when it emits
//! the effect and only applies the inner result if that id is still active.

use careerbuzz_core::theme::ThemePreference;
use crossterm::event::Event as CrosstermEvent;
use serde_json::Value;

use crate::common::{TaskCompleted, TaskKind};

#[derive(Debug)]
pub enum ThemeUiEvent {
    /// User asked to flip the theme.
    ToggleRequested,
    /// Presentation port reported the theme now in effect.
    Applied(ThemePreference),
}

#[derive(Debug)]
pub enum DemoUiEvent {
    /// Replace the skills draft verbatim.
    InputChanged(String),
    Submit,
    /// Analyze call returned a decodable body.
    Analyzed(Value),
    /// Analyze call failed (transport, status, or decode).
    AnalyzeFailed,
}

#[derive(Debug)]
pub enum FeedbackUiEvent {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
    Sent,
    Failed,
}

#[derive(Debug)]
pub enum ChatUiEvent {
    InputChanged(String),
    Send,
    /// Chat call succeeded; `reply` may be absent or empty.
    Replied { reply: Option<String> },
    Failed,
}

#[derive(Debug)]
pub enum DrawerUiEvent {
    Open,
    Close,
}

#[derive(Debug)]
pub enum UiEvent {
    /// Frame tick (animations, drawer transitions).
    Tick,
    Terminal(CrosstermEvent),
    Theme(ThemeUiEvent),
    Demo(DemoUiEvent),
    Feedback(FeedbackUiEvent),
    Chat(ChatUiEvent),
    Drawer(DrawerUiEvent),
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}
