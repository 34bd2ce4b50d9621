//! Top-level view: lays out the landing sections and draws the drawer on top.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::features::demo::render_demo;
use crate::features::feedback::render_feedback;
use crate::features::landing;
use crate::features::theme::Palette;
use crate::overlays::chat_drawer;
use crate::overlays::render_utils::{InputHint, render_hints};
use crate::state::{AppState, Focus};

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let palette = Palette::for_theme(app.tui.theme);
    frame.render_widget(Block::default().style(palette.base()), area);

    let [header, hero, features, about, forms, _spacer, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(12),
        Constraint::Length(4),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    // The page only owns the cursor while the drawer is closed.
    let page_focus = (!app.overlay.is_open()).then_some(app.tui.focus);

    render_header(frame, header, app, &palette);
    render_hero(frame, hero, app, page_focus, &palette);
    landing::render_features(frame, features, &palette);
    landing::render_about(frame, about, &palette);

    let [feedback_area, contact_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(forms);
    render_feedback(
        frame,
        feedback_area,
        &app.tui.feedback,
        page_focus.and_then(Focus::feedback_field),
        &palette,
    );
    landing::render_contact(frame, contact_area, &palette);

    render_hints(
        frame,
        footer,
        &[
            InputHint::new("Tab", "next field"),
            InputHint::new("Enter", "submit"),
            InputHint::new("Ctrl+T", "theme"),
            InputHint::new("Ctrl+O", "chat"),
            InputHint::new("Ctrl+C", "quit"),
        ],
        &palette,
    );

    chat_drawer::render(frame, area, &app.overlay, &app.tui.chat, &palette);
}

fn render_header(frame: &mut Frame, area: Rect, app: &AppState, palette: &Palette) {
    let brand = Line::from(vec![
        Span::styled(
            " CareerBuzz",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Smart career suggestions", palette.muted()),
    ]);
    frame.render_widget(Paragraph::new(brand), area);

    let theme = Line::from(Span::styled(
        format!("theme: {} ", app.tui.theme),
        palette.muted(),
    ));
    frame.render_widget(Paragraph::new(theme).alignment(Alignment::Right), area);
}

fn render_hero(
    frame: &mut Frame,
    area: Rect,
    app: &AppState,
    page_focus: Option<Focus>,
    palette: &Palette,
) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(area);
    let [text_area, demo_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(left);

    landing::render_hero_text(frame, text_area, palette);
    render_demo(
        frame,
        demo_area,
        &app.tui.demo,
        page_focus == Some(Focus::Skills),
        app.tui.tick,
        palette,
    );
    landing::render_roadmap(frame, right, app.tui.tick, palette);
}

#[cfg(test)]
mod tests {
    use careerbuzz_core::theme::ThemePreference;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use serde_json::json;

    use super::*;
    use crate::events::{DrawerUiEvent, UiEvent};
    use crate::features::feedback::FeedbackStatus;
    use crate::overlays::DRAWER_TRANSITION_TICKS;
    use crate::update::update;

    fn render_to_string(app: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buf = terminal.backend().buffer();
        let area = buf.area;
        let mut lines = Vec::new();
        for y in area.y..area.y + area.height {
            let mut line = String::new();
            for x in area.x..area.x + area.width {
                line.push_str(buf[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn test_landing_sections_render() {
        let app = AppState::default();
        let screen = render_to_string(&app, 140, 40);

        assert!(screen.contains("CareerBuzz"));
        assert!(screen.contains("Design your career roadmap with confidence"));
        assert!(screen.contains("Try demo: python, sql, pandas"));
        assert!(screen.contains("Skill Gap Analysis"));
        assert!(screen.contains("What users say"));
        assert!(screen.contains("Send Feedback"));
        assert!(screen.contains("theme: dark"));
    }

    #[test]
    fn test_demo_analysis_result_renders() {
        let mut app = AppState::default();
        app.tui.demo.result = Some(json!({
            "enteredSkills": ["java"],
            "suggestedCareers": ["Backend Developer"]
        }));

        let screen = render_to_string(&app, 140, 40);

        assert!(screen.contains("Entered skills: java"));
        assert!(screen.contains("• Backend Developer"));
    }

    #[test]
    fn test_feedback_status_renders() {
        let mut app = AppState::default();
        app.tui.feedback.status = FeedbackStatus::Error;

        let screen = render_to_string(&app, 140, 40);

        assert!(screen.contains("Failed to send. Try later."));
    }

    #[test]
    fn test_drawer_shows_greeting_once_open() {
        let mut app = AppState::new(ThemePreference::Light);
        update(&mut app, UiEvent::Drawer(DrawerUiEvent::Open));
        for _ in 0..DRAWER_TRANSITION_TICKS {
            update(&mut app, UiEvent::Tick);
        }

        let screen = render_to_string(&app, 140, 40);

        assert!(screen.contains("CareerBuzz Chat"));
        assert!(screen.contains("Hi! I'm CareerBuzz assistant"));
    }

    #[test]
    fn test_header_shows_theme_with_drawer_closed() {
        let app = AppState::new(ThemePreference::Light);

        let screen = render_to_string(&app, 140, 40);

        assert!(screen.contains("theme: light"));
        assert!(!screen.contains("CareerBuzz Chat"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = AppState::default();
        update(&mut app, UiEvent::Drawer(DrawerUiEvent::Open));
        render_to_string(&app, 10, 5);
    }
}
