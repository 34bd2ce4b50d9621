//! Chat drawer: docked on the right edge, slides in and out over a few ticks.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use super::render_utils::{InputHint, InputLine, render_container, render_hints, render_input_line};
use super::{OverlayController, OverlayUpdate};
use crate::events::ChatUiEvent;
use crate::features::chat::{ChatState, handle_chat_event, render_chat_log};
use crate::features::theme::Palette;

const DRAWER_WIDTH: u16 = 48;

/// Handles a key while the drawer owns input.
pub fn handle_key(chat: &mut ChatState, key: KeyEvent) -> OverlayUpdate {
    match key.code {
        KeyCode::Esc => OverlayUpdate::close(),
        KeyCode::Enter => {
            OverlayUpdate::stay().with_ui_effects(handle_chat_event(chat, ChatUiEvent::Send))
        }
        _ => {
            chat.input.input(key);
            OverlayUpdate::stay()
        }
    }
}

/// Area the drawer occupies for the current transition phase.
pub fn drawer_area(area: Rect, overlay: &OverlayController) -> Rect {
    let full_width = DRAWER_WIDTH.min(area.width);
    let width = (f32::from(full_width) * overlay.visible_fraction()).round() as u16;
    Rect::new(area.x + area.width - width, area.y, width, area.height)
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    overlay: &OverlayController,
    chat: &ChatState,
    palette: &Palette,
) {
    if !overlay.is_mounted() {
        return;
    }
    let popup = drawer_area(area, overlay);
    if popup.width < 4 || popup.height < 4 {
        return;
    }

    let inner = render_container(frame, popup, "CareerBuzz Chat", overlay.is_open(), palette);
    let [log_area, input_area, hints_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_chat_log(frame, log_area, chat, palette);
    render_input_line(
        frame,
        input_area,
        &InputLine {
            label: "you",
            field: &chat.input,
            placeholder: Some("Ask something..."),
            focused: overlay.is_open(),
        },
        palette,
    );
    render_hints(
        frame,
        hints_area,
        &[InputHint::new("Enter", "send"), InputHint::new("Esc", "close")],
        palette,
    );
}
