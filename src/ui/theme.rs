//! Colors and styles for the form

use ratatui::style::{Color, Modifier, Style};

use crate::types::Severity;

/// Field-green theme.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(10, 14, 8);
    pub const FG: Color = Color::Rgb(214, 226, 196);
    pub const FG_DIM: Color = Color::Rgb(130, 150, 110);
    pub const FG_MUTED: Color = Color::Rgb(80, 90, 72);

    pub const ACCENT_MAIZE: Color = Color::Rgb(240, 200, 60);
    pub const ACCENT_GREEN: Color = Color::Rgb(110, 210, 90);
    pub const ACCENT_RED: Color = Color::Rgb(255, 90, 80);
    pub const ACCENT_CYAN: Color = Color::Rgb(90, 200, 220);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    /// Border of the focused field or button.
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::ACCENT_MAIZE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT_MAIZE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    pub fn key() -> Style {
        Style::default()
            .fg(Self::ACCENT_CYAN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn severity(severity: Severity) -> Style {
        match severity {
            Severity::Info => Self::dim(),
            Severity::Success => Self::ok(),
            Severity::Error => Self::error(),
        }
    }
}
