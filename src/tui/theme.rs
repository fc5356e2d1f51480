//! Color themes and styling for TUI components.

use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the coverage viewer
pub struct Theme {
    /// Accent color (cyan for the button, headers and key hints)
    pub primary: Color,
    /// Success color (green for well-covered numbers)
    pub success: Color,
    /// Muted color (dark gray for hints and placeholders)
    pub muted: Color,
    /// Text color (white for normal text)
    pub text: Color,
    /// Background color (black/default)
    pub background: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
            background: Color::Reset,
        }
    }

    /// Accent color (alias for primary)
    pub fn accent(&self) -> Color {
        self.primary
    }

    /// Style of the "Select a JSON file" button
    pub fn button_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    }

    /// Summary block title
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .add_modifier(Modifier::BOLD)
    }

    /// Emphasis for target headers and file names
    pub fn emphasis_style(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Highlighted row in the file picker
    pub fn selected_style(&self) -> Style {
        Style::default().bg(Color::DarkGray).fg(self.text)
    }

    pub fn directory_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
