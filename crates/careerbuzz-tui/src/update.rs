//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime (or the headless session
//! controller) calls `update(app, event)` and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::common::TextField;
use crate::effects::UiEffect;
use crate::events::{DemoUiEvent, DrawerUiEvent, FeedbackUiEvent, ThemeUiEvent, UiEvent};
use crate::features::chat::handle_chat_event;
use crate::features::demo::handle_demo_event;
use crate::features::feedback::{FeedbackField, handle_feedback_event};
use crate::overlays::{OverlayTransition, chat_drawer};
use crate::state::{AppState, Focus, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.tick = app.tui.tick.wrapping_add(1);
            app.overlay.tick();
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Theme(ThemeUiEvent::ToggleRequested) => vec![UiEffect::ToggleTheme],
        UiEvent::Theme(ThemeUiEvent::Applied(theme)) => {
            app.tui.theme = theme;
            vec![]
        }
        UiEvent::Demo(event) => {
            let tui = &mut app.tui;
            handle_demo_event(&mut tui.demo, &mut tui.tasks, &mut tui.task_seq, event)
        }
        UiEvent::Feedback(event) => handle_feedback_event(&mut app.tui.feedback, event),
        UiEvent::Chat(event) => handle_chat_event(&mut app.tui.chat, event),
        UiEvent::Drawer(DrawerUiEvent::Open) => {
            app.overlay.open();
            vec![]
        }
        UiEvent::Drawer(DrawerUiEvent::Close) => {
            app.overlay.close();
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, id = completed.id.0, "Dropping stale task result");
                vec![]
            }
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            if app.overlay.is_open() {
                app.tui.chat.input.insert_str(&text);
            } else {
                focused_field_mut(&mut app.tui).insert_str(&text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global shortcuts work with or without the drawer.
    match key.code {
        KeyCode::Char('c') if ctrl => return vec![UiEffect::Quit],
        KeyCode::Char('t') if ctrl => return vec![UiEffect::ToggleTheme],
        _ => {}
    }

    if app.overlay.is_open() {
        let update = chat_drawer::handle_key(&mut app.tui.chat, key);
        if update.transition == OverlayTransition::Close {
            app.overlay.close();
        }
        return update.effects;
    }

    match key.code {
        KeyCode::Char('o') if ctrl => {
            app.overlay.open();
            vec![]
        }
        KeyCode::F(2) => {
            app.overlay.open();
            vec![]
        }
        KeyCode::Tab => {
            app.tui.focus = app.tui.focus.next();
            vec![]
        }
        KeyCode::BackTab => {
            app.tui.focus = app.tui.focus.prev();
            vec![]
        }
        KeyCode::Enter => handle_enter(&mut app.tui),
        _ => {
            focused_field_mut(&mut app.tui).input(key);
            vec![]
        }
    }
}

fn handle_enter(tui: &mut TuiState) -> Vec<UiEffect> {
    match tui.focus {
        Focus::Skills => handle_demo_event(
            &mut tui.demo,
            &mut tui.tasks,
            &mut tui.task_seq,
            DemoUiEvent::Submit,
        ),
        Focus::Feedback(FeedbackField::Message) => {
            handle_feedback_event(&mut tui.feedback, FeedbackUiEvent::Submit)
        }
        Focus::Feedback(_) => {
            tui.focus = tui.focus.next();
            vec![]
        }
    }
}

fn focused_field_mut(tui: &mut TuiState) -> &mut TextField {
    match tui.focus {
        Focus::Skills => &mut tui.demo.draft,
        Focus::Feedback(field) => tui.feedback.field_mut(field),
    }
}
