//! Static marketing sections of the landing page.
//!
//! Content is fixed; only the roadmap preview animates, revealing one step
//! every few ticks after startup.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::features::theme::Palette;
use crate::overlays::render_utils::render_container;

pub const HERO_TITLE: &str = "Design your career roadmap with confidence";
pub const HERO_SUBTITLE: &str = "Enter your skills, discover matching careers, and follow a \
     personalized roadmap. CareerBuzz helps you become job-ready faster.";

pub const ROADMAP_STEPS: [&str; 5] = ["Basics", "Intermediate", "Projects", "Portfolio", "Apply"];

/// Ticks between two revealed roadmap steps.
const ROADMAP_REVEAL_TICKS: usize = 3;

pub const FEATURES: [(&str, &str); 3] = [
    ("Skill Gap Analysis", "Find what you need to learn next."),
    ("Personalized Roadmaps", "Step-by-step learning paths."),
    ("Progress Tracker", "Track progress and earn badges."),
];

pub const ABOUT: &str = "CareerBuzz is an AI-assisted platform that converts your skills into \
     actionable career pathways. Our mission is to make career planning accessible, \
     data-driven, and motivating.";

pub const TESTIMONIALS: [(&str, &str); 2] = [
    ("Aisha, Student", "The roadmap helped me land my internship!"),
    ("Ravi, Junior Dev", "Simple and actionable guidance."),
];

pub const CONTACT_BLURB: &str = "Use our AI assistant for quick queries or leave a message. \
     We'll reply in your dashboard messages or by email.";

/// Number of roadmap steps visible after `tick` frames.
pub fn roadmap_revealed(tick: usize) -> usize {
    (tick / ROADMAP_REVEAL_TICKS + 1).min(ROADMAP_STEPS.len())
}

pub fn render_hero_text(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(HERO_SUBTITLE, palette.muted())),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn render_roadmap(frame: &mut Frame, area: Rect, tick: usize, palette: &Palette) {
    let inner = render_container(frame, area, "Animated Roadmap Preview", false, palette);
    let revealed = roadmap_revealed(tick);

    let lines: Vec<Line<'_>> = ROADMAP_STEPS
        .iter()
        .take(revealed)
        .enumerate()
        .map(|(i, step)| {
            let badge_style = if i == 0 {
                Style::default()
                    .fg(palette.background)
                    .bg(palette.accent)
            } else {
                Style::default().fg(palette.text).bg(palette.border)
            };
            let detail = if *step == "Projects" {
                "Build 2 demo projects"
            } else {
                "Learn core concepts"
            };
            Line::from(vec![
                Span::styled(format!(" {} ", i + 1), badge_style),
                Span::raw(" "),
                Span::styled(*step, palette.heading()),
                Span::styled(format!("  {detail}"), palette.muted()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render_features(frame: &mut Frame, area: Rect, palette: &Palette) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
    for ((title, description), column) in FEATURES.iter().zip(columns.iter()) {
        let inner = render_container(frame, *column, title, false, palette);
        frame.render_widget(
            Paragraph::new(Span::styled(*description, palette.muted())).wrap(Wrap { trim: true }),
            inner,
        );
    }
}

pub fn render_about(frame: &mut Frame, area: Rect, palette: &Palette) {
    let [about, testimonials] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let inner = render_container(frame, about, "About CareerBuzz", false, palette);
    frame.render_widget(
        Paragraph::new(Span::styled(ABOUT, palette.muted())).wrap(Wrap { trim: true }),
        inner,
    );

    let inner = render_container(frame, testimonials, "What users say", false, palette);
    let lines: Vec<Line<'_>> = TESTIMONIALS
        .iter()
        .flat_map(|(who, quote)| {
            [
                Line::from(Span::styled(*who, palette.heading())),
                Line::from(Span::styled(format!("\"{quote}\""), palette.muted())),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Contact card with the second entry point into the chat drawer.
pub fn render_contact(frame: &mut Frame, area: Rect, palette: &Palette) {
    let inner = render_container(frame, area, "Contact & Chat", false, palette);
    let lines = vec![
        Line::from(Span::styled(CONTACT_BLURB, palette.muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Ctrl+O] ", palette.muted()),
            Span::styled(
                "Open Chat",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roadmap_reveals_progressively() {
        assert_eq!(roadmap_revealed(0), 1);
        assert_eq!(roadmap_revealed(ROADMAP_REVEAL_TICKS), 2);
        assert_eq!(roadmap_revealed(1_000), ROADMAP_STEPS.len());
    }
}
