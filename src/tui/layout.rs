//! Overlay geometry and the help overlay.

use super::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rectangle centered in `area`, sized as a percentage of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

const HELP_ENTRIES: &[(&str, &str)] = &[
    ("o / Enter", "Select a JSON file"),
    ("↑↓ / jk", "Scroll"),
    ("PgUp / PgDn", "Scroll a page"),
    ("g / G", "Top / bottom"),
    ("?", "This help"),
    ("q / Ctrl+C", "Quit"),
    ("", ""),
    ("File picker", ""),
    ("Enter / →", "Open directory or choose file"),
    ("Backspace / ←", "Parent directory"),
    (".", "Show hidden files"),
    ("Esc", "Cancel"),
];

/// Render the key reference on top of the current view
pub fn render_help_overlay(frame: &mut Frame) {
    let theme = Theme::default();
    let area = centered_rect(60, 70, frame.area());

    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("{:<16}", keys), Style::default().fg(theme.accent())),
                Span::raw(*description),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Help (any key to close)")
            .border_style(Style::default().fg(theme.accent())),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}
