//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── focus: Focus           (which page field receives keys)
//! │   ├── theme: ThemePreference (mirror of the applied theme)
//! │   ├── demo: DemoState        (skills draft, phase, result)
//! │   ├── feedback: FeedbackState
//! │   ├── chat: ChatState        (message log, pending input)
//! │   ├── task_seq / tasks       (single-flight task tracking)
//! │   └── tick                   (animation frame counter)
//! └── overlay: OverlayController (chat drawer visibility)
//! ```
//!
//! Overlay state is split from `TuiState` so the drawer handler can borrow
//! the chat slice mutably while the controller is updated.

use careerbuzz_core::theme::ThemePreference;

use crate::common::{TaskSeq, Tasks};
use crate::features::chat::ChatState;
use crate::features::demo::DemoState;
use crate::features::feedback::{FeedbackField, FeedbackState};
use crate::overlays::OverlayController;

/// Combined application state for the TUI.
#[derive(Debug, Default)]
pub struct AppState {
    pub tui: TuiState,
    pub overlay: OverlayController,
}

impl AppState {
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            tui: TuiState {
                theme,
                ..TuiState::default()
            },
            overlay: OverlayController::default(),
        }
    }
}

/// Page field that receives keyboard input when the drawer is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Skills,
    Feedback(FeedbackField),
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Skills,
        Focus::Feedback(FeedbackField::Name),
        Focus::Feedback(FeedbackField::Email),
        Focus::Feedback(FeedbackField::Message),
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn feedback_field(self) -> Option<FeedbackField> {
        match self {
            Focus::Feedback(field) => Some(field),
            Focus::Skills => None,
        }
    }
}

/// TUI application state (non-overlay).
#[derive(Debug, Default)]
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub focus: Focus,
    /// Theme last reported by the presentation port.
    pub theme: ThemePreference,
    pub demo: DemoState,
    pub feedback: FeedbackState,
    pub chat: ChatState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Frames elapsed; drives spinner and roadmap animation.
    pub tick: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut focus = Focus::default();
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Skills);

        assert_eq!(
            Focus::Skills.prev(),
            Focus::Feedback(FeedbackField::Message)
        );
        assert_eq!(Focus::Skills.next().feedback_field(), Some(FeedbackField::Name));
    }
}
