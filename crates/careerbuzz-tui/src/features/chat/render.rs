use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::{ChatState, Sender};
use crate::features::theme::Palette;

/// Renders the message log, scrolled so the newest message stays visible.
pub fn render_chat_log(frame: &mut Frame, area: Rect, chat: &ChatState, palette: &Palette) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let width = area.width as usize;
    let mut lines: Vec<Line<'_>> = Vec::new();
    let mut rows = 0usize;
    for message in chat.messages() {
        let (label, style) = match message.sender {
            Sender::User => (
                "You",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Sender::Bot => (
                "CareerBuzz",
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        let prefix = format!("{label}: ");
        rows += (prefix.width() + message.text.width()).div_ceil(width).max(1);
        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(message.text.as_str(), Style::default().fg(palette.text)),
        ]));
    }

    // Estimated from display width; word wrapping may add a row now and then.
    let scroll = rows.saturating_sub(area.height as usize);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}
