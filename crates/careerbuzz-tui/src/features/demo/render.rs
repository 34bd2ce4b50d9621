use careerbuzz_core::analysis::DemoResultView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::DemoState;
use crate::features::theme::Palette;
use crate::overlays::render_utils::{InputLine, render_container, render_input_line};

const PLACEHOLDER: &str = "Try demo: python, sql, pandas";
const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

pub fn render_demo(
    frame: &mut Frame,
    area: Rect,
    demo: &DemoState,
    focused: bool,
    spinner_frame: usize,
    palette: &Palette,
) {
    let inner = render_container(frame, area, "Try Demo", focused, palette);
    let [input_area, button_area, result_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    render_input_line(
        frame,
        input_area,
        &InputLine {
            label: "skills",
            field: &demo.draft,
            placeholder: Some(PLACEHOLDER),
            focused,
        },
        palette,
    );

    let button = if demo.is_submitting() {
        let spinner = SPINNER[spinner_frame % SPINNER.len()];
        Line::from(Span::styled(
            format!("{spinner} Analyzing..."),
            Style::default().fg(palette.accent),
        ))
    } else {
        Line::from(vec![
            Span::styled("[Enter] ", palette.muted()),
            Span::styled(
                "Try Demo",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(button), button_area);

    if let Some(view) = demo.result_view() {
        frame.render_widget(
            Paragraph::new(result_lines(&view, palette)).wrap(Wrap { trim: false }),
            result_area,
        );
    }
}

fn result_lines(view: &DemoResultView, palette: &Palette) -> Vec<Line<'static>> {
    let header = Line::from(Span::styled("Suggested Careers", palette.muted()));
    let bullet = |item: &String| {
        Line::from(Span::styled(
            format!("• {item}"),
            palette.heading(),
        ))
    };

    match view {
        DemoResultView::Careers(careers) => std::iter::once(header)
            .chain(careers.iter().map(bullet))
            .collect(),
        DemoResultView::Analysis {
            entered_skills,
            suggested_careers,
        } => {
            let mut lines = vec![Line::from(vec![
                Span::styled("Entered skills: ", palette.muted()),
                Span::styled(entered_skills.join(", "), Style::default().fg(palette.text)),
            ])];
            lines.push(header);
            lines.extend(suggested_careers.iter().map(bullet));
            lines
        }
        DemoResultView::Error(message) => vec![
            header,
            Line::from(Span::styled(
                message.clone(),
                Style::default().fg(palette.error),
            )),
        ],
        DemoResultView::Raw(text) => vec![
            header,
            Line::from(Span::styled(text.clone(), Style::default().fg(palette.text))),
        ],
    }
}
