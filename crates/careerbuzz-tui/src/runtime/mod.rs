//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here or in
//! the session controller it wraps. The reducer stays pure and produces
//! effects.
//!
//! Structure:
//! - `mod.rs`: Terminal runtime (TuiRuntime, event loop, frame pacing)
//! - `controller.rs`: Headless session controller (state, effect dispatch)
//! - `handlers.rs`: Async service-call handlers
//! - `inbox.rs`: Inbox channel types

mod controller;
mod handlers;
mod inbox;
#[cfg(test)]
pub(crate) mod testing;

use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use careerbuzz_core::api::CareerApi;
use careerbuzz_core::preferences::PreferenceStore;
pub use controller::SessionController;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::events::UiEvent;
use crate::{render, terminal};

/// Frame interval while something animates (requests, drawer, typing).
pub const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Poll duration when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(120);

/// Full-screen TUI runtime.
///
/// Owns the terminal and the session controller. Terminal state is restored
/// on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub session: SessionController,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last time a terminal event was received (for fast tick during interaction).
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime. Must be called inside a tokio runtime.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be put into raw mode.
    pub fn new(api: Arc<dyn CareerApi>, store: Arc<dyn PreferenceStore>) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let now = Instant::now();
        Ok(Self {
            terminal,
            session: SessionController::new(api, store),
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if reading terminal events or drawing fails.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        let result = self.event_loop();
        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.session.state.tui.should_quit {
            let events = self.collect_events()?;
            for event in events {
                // Only Tick triggers render; terminal input batches to the next tick.
                if matches!(event, UiEvent::Tick) {
                    dirty = true;
                }
                self.session.dispatch(event);
            }

            if self.session.drain_inbox() > 0 {
                dirty = true;
            }

            if dirty {
                let state = &self.session.state;
                self.terminal.draw(|frame| render::render(state, frame))?;
                dirty = false;
            }
        }

        tracing::info!("Landing session closed");
        Ok(())
    }

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let state = &self.session.state;
        let needs_fast_poll = self.session.has_pending_work()
            || state.overlay.is_mounted()
            || self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        let poll_duration = tick_interval.saturating_sub(self.last_tick.elapsed());
        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
            self.last_terminal_event = Instant::now();
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
