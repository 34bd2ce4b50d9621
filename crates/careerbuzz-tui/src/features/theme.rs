//! Color palettes for the two presentation modes.

use careerbuzz_core::theme::ThemePreference;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
    pub placeholder: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Rgb(15, 23, 42),
        surface: Color::Rgb(30, 41, 59),
        text: Color::Rgb(241, 245, 249),
        muted: Color::Rgb(148, 163, 184),
        accent: Color::Rgb(129, 140, 248),
        border: Color::Rgb(71, 85, 105),
        success: Color::Rgb(74, 222, 128),
        error: Color::Rgb(251, 113, 133),
        placeholder: Color::Rgb(100, 116, 139),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(255, 255, 255),
        surface: Color::Rgb(248, 250, 252),
        text: Color::Rgb(15, 23, 42),
        muted: Color::Rgb(100, 116, 139),
        accent: Color::Rgb(99, 102, 241),
        border: Color::Rgb(203, 213, 225),
        success: Color::Rgb(22, 163, 74),
        error: Color::Rgb(225, 29, 72),
        placeholder: Color::Rgb(148, 163, 184),
    };

    pub fn for_theme(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => Self::LIGHT,
            ThemePreference::Dark => Self::DARK,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Border style, highlighted when the section holds focus.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }
}
