use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{FeedbackField, FeedbackState, FeedbackStatus};
use crate::features::theme::Palette;
use crate::overlays::render_utils::{InputLine, render_container, render_input_line};

/// Renders the form. `focused` names the field holding the cursor, if any.
pub fn render_feedback(
    frame: &mut Frame,
    area: Rect,
    feedback: &FeedbackState,
    focused: Option<FeedbackField>,
    palette: &Palette,
) {
    let inner = render_container(frame, area, "Send Feedback", focused.is_some(), palette);
    let [name_area, email_area, message_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    let rows = [
        (name_area, "name", &feedback.name, "Your name", FeedbackField::Name),
        (email_area, "email", &feedback.email, "Your email", FeedbackField::Email),
        (
            message_area,
            "message",
            &feedback.message,
            "Message",
            FeedbackField::Message,
        ),
    ];
    for (row_area, label, field, placeholder, which) in rows {
        render_input_line(
            frame,
            row_area,
            &InputLine {
                label,
                field,
                placeholder: Some(placeholder),
                focused: focused == Some(which),
            },
            palette,
        );
    }

    if let Some(message) = feedback.status.message() {
        let color = if feedback.status == FeedbackStatus::Sent {
            palette.success
        } else {
            palette.error
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(message, Style::default().fg(color)))),
            status_area,
        );
    }
}
