use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::common::{TextField, truncate_start_with_ellipsis, truncate_with_ellipsis};
use crate::features::theme::Palette;

/// Renders the base container for a panel or overlay (clears background,
/// draws border and title) and returns the inner area.
pub fn render_container(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    focused: bool,
    palette: &Palette,
) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(palette.surface).fg(palette.text))
        .border_style(palette.border(focused))
        .title(format!(" {title} "))
        .title_style(palette.border(focused).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Configuration for rendering a single-line input.
pub struct InputLine<'a> {
    pub label: &'a str,
    pub field: &'a TextField,
    pub placeholder: Option<&'a str>,
    pub focused: bool,
}

/// Renders `label> text` and places the terminal cursor when focused.
pub fn render_input_line(frame: &mut Frame, area: Rect, input: &InputLine<'_>, palette: &Palette) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let prompt = format!("{}> ", input.label);
    let prompt_width = prompt.width();
    let max_text_width = (area.width as usize).saturating_sub(prompt_width + 1);
    let value = input.field.text();

    let mut spans = vec![Span::styled(prompt, palette.border(input.focused))];
    let visible = if value.is_empty() {
        if let Some(placeholder) = input.placeholder {
            spans.push(Span::styled(
                truncate_with_ellipsis(placeholder, max_text_width),
                Style::default().fg(palette.placeholder),
            ));
        }
        String::new()
    } else {
        let visible = truncate_start_with_ellipsis(value, max_text_width);
        spans.push(Span::styled(visible.clone(), Style::default().fg(palette.text)));
        visible
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if input.focused {
        let hidden_after_cursor = value.width().saturating_sub(input.field.cursor_column());
        let cursor_col = visible.width().saturating_sub(hidden_after_cursor);
        let x = area.x + (prompt_width + cursor_col).min(area.width as usize - 1) as u16;
        frame.set_cursor_position(Position::new(x, area.y));
    }
}

/// Renders a centered line of keyboard hints.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint<'_>], palette: &Palette) {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", palette.muted()));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(palette.accent)));
        spans.push(Span::styled(format!(" {}", hint.action), palette.muted()));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use careerbuzz_core::theme::ThemePreference;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render_line(field: &TextField, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        let palette = Palette::for_theme(ThemePreference::Dark);
        let input = InputLine {
            label: "skills",
            field,
            placeholder: Some("Try demo: python, sql, pandas"),
            focused: true,
        };
        terminal
            .draw(|frame| render_input_line(frame, frame.area(), &input, &palette))
            .unwrap();
        let buf = terminal.backend().buffer();
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_narrow_placeholder_keeps_its_start() {
        let line = render_line(&TextField::new(), 20);

        assert!(line.starts_with("skills> Try demo"), "{line:?}");
        assert!(line.contains('…'));
    }

    #[test]
    fn test_narrow_value_keeps_its_end() {
        let mut field = TextField::new();
        field.set("python, sql, pandas, spark");

        let line = render_line(&field, 20);

        assert!(line.starts_with("skills> …"), "{line:?}");
        assert!(line.contains("spark"));
    }
}
