//! Headless session controller.
//!
//! Owns the application state, the service client and the theme controller,
//! and executes reducer effects. The terminal runtime wraps it; tests drive it
//! directly without a TTY.

use std::future::Future;
use std::sync::Arc;

use careerbuzz_core::api::CareerApi;
use careerbuzz_core::preferences::PreferenceStore;
use careerbuzz_core::theme::{PresentationMode, ThemeController, ThemePreference};
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use super::handlers;
use super::inbox::{UiEventReceiver, UiEventSender};
use crate::common::{TaskCompleted, TaskId, TaskKind};
use crate::effects::UiEffect;
use crate::events::{ThemeUiEvent, UiEvent};
use crate::state::AppState;
use crate::update;

/// Presentation port that reports applied themes back through the inbox.
struct InboxPresentation {
    tx: UiEventSender,
}

impl PresentationMode for InboxPresentation {
    fn apply(&self, theme: ThemePreference) {
        let _ = self.tx.send(UiEvent::Theme(ThemeUiEvent::Applied(theme)));
    }
}

pub struct SessionController {
    /// Application state (split: tui + overlay).
    pub state: AppState,
    api: Arc<dyn CareerApi>,
    theme: ThemeController,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - drained by the owner of the controller.
    inbox_rx: UiEventReceiver,
    /// Spawned service calls that have not finished yet.
    in_flight: JoinSet<()>,
}

impl SessionController {
    /// Loads the theme preference and builds the initial state.
    pub fn new(api: Arc<dyn CareerApi>, store: Arc<dyn PreferenceStore>) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let presentation = Arc::new(InboxPresentation {
            tx: inbox_tx.clone(),
        });
        let theme = ThemeController::load(store, presentation);
        let state = AppState::new(theme.current());

        Self {
            state,
            api,
            theme,
            inbox_tx,
            inbox_rx,
            in_flight: JoinSet::new(),
        }
    }

    /// Theme held by the theme controller (authoritative value).
    pub fn theme(&self) -> ThemePreference {
        self.theme.current()
    }

    /// Runs one event through the reducer and executes its effects.
    pub fn dispatch(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Dispatches every event already waiting in the inbox. Returns how many.
    pub fn drain_inbox(&mut self) -> usize {
        while self.in_flight.try_join_next().is_some() {}

        let mut count = 0;
        while let Ok(event) = self.inbox_rx.try_recv() {
            self.dispatch(event);
            count += 1;
        }
        count
    }

    /// Waits for the next inbox event and dispatches it.
    pub async fn step(&mut self) -> bool {
        match self.inbox_rx.recv().await {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    /// Dispatches results until no spawned call is left.
    pub async fn run_until_idle(&mut self) {
        loop {
            self.drain_inbox();
            if self.in_flight.join_next().await.is_none() {
                break;
            }
        }
    }

    pub fn has_pending_work(&self) -> bool {
        !self.in_flight.is_empty()
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::ToggleTheme => {
                self.theme.toggle();
            }
            UiEffect::AnalyzeSkills { task, skills } => {
                let api = Arc::clone(&self.api);
                self.spawn_task(TaskKind::DemoAnalyze, task, move || {
                    handlers::analyze_skills(api, skills)
                });
            }
            UiEffect::SubmitFeedback { request } => {
                let api = Arc::clone(&self.api);
                self.spawn_effect(move || handlers::submit_feedback(api, request));
            }
            UiEffect::SendChat { message } => {
                let api = Arc::clone(&self.api);
                self.spawn_effect(move || handlers::send_chat(api, message));
            }
        }
    }

    /// Spawns an async effect and sends its result event when complete.
    fn spawn_effect<F, Fut>(&mut self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        self.in_flight.spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    /// Spawns a tracked task; its result is wrapped in `TaskCompleted` so the
    /// reducer can drop it if the task is no longer active.
    fn spawn_task<F, Fut>(&mut self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        self.in_flight.spawn(async move {
            let inner = f().await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }
}
