//! Main view rendering.
//!
//! Layout, top to bottom: the "Select a JSON file" button, then either the
//! prompt or the summary block plus the scrollable target list, then a
//! one-line footer. The picker and help overlays draw on top.

use super::app::{ViewMode, ViewerApp};
use super::layout::{centered_rect, render_help_overlay};
use super::list_state::calculate_visible_range;
use super::picker::{EntryKind, FilePicker};
use super::theme::Theme;
use crate::display::tree::{DisplayTree, Summary, TargetGroup, OPEN_BUTTON};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &mut ViewerApp) {
    let theme = Theme::default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Button
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_button(frame, chunks[0], &theme);
    render_body(frame, app, chunks[1], &theme);
    render_footer(frame, app, chunks[2], &theme);

    match app.view_mode() {
        ViewMode::Main => {}
        ViewMode::Picker => render_picker_overlay(frame, app, &theme),
        ViewMode::Help => render_help_overlay(frame),
    }
}

fn render_button(frame: &mut Frame, area: Rect, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", OPEN_BUTTON), theme.button_style()),
        Span::styled("  (o)", theme.muted_style()),
    ]);
    let button = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(button, area);
}

fn render_body(frame: &mut Frame, app: &mut ViewerApp, area: Rect, theme: &Theme) {
    let (summary_lines, list_lines) = match app.tree() {
        DisplayTree::Prompt(prompt) => {
            let prompt = Paragraph::new(Span::styled(prompt.clone(), theme.muted_style()));
            frame.render_widget(prompt, area);
            app.set_list_geometry(0, area.height as usize);
            return;
        }
        DisplayTree::Coverage { summary, groups } => {
            (summary_lines(summary, theme), flatten(groups, theme))
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary_lines.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .split(area);

    let summary = Paragraph::new(summary_lines).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(summary, chunks[0]);

    let viewport = chunks[1].height as usize;
    app.set_list_geometry(list_lines.len(), viewport);
    let range = calculate_visible_range(app.scroll_offset(), viewport, list_lines.len());
    let visible: Vec<Line<'static>> = list_lines[range].to_vec();
    frame.render_widget(Paragraph::new(visible), chunks[1]);
}

fn summary_lines(summary: &Summary, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(summary.title.clone(), theme.title_style())),
        Line::from(summary.covered_lines.clone()),
        Line::from(summary.executable_lines.clone()),
        Line::from(summary.total_coverage.clone()),
    ]
}

/// Flatten target groups into scrollable lines.
///
/// One header per target, one line per file, a blank line between targets.
pub fn flatten(groups: &[TargetGroup], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled("Target: ", theme.label_style()),
            Span::styled(group.header.clone(), theme.emphasis_style()),
        ]));
        for row in &group.rows {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(row.name.clone(), theme.emphasis_style()),
                Span::raw(" — "),
                Span::raw(row.coverage.clone()),
                Span::raw(" — "),
                Span::raw(row.line_counts.clone()),
            ]));
        }
    }

    lines
}

fn render_footer(frame: &mut Frame, app: &ViewerApp, area: Rect, theme: &Theme) {
    let loading: Vec<String> = app
        .loading()
        .map(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        })
        .collect();

    let line = if let Some(status) = loading_status(&loading) {
        Line::from(Span::styled(status, Style::default().fg(theme.accent())))
    } else {
        let mut spans = Vec::new();
        if app.has_report() && app.list_len() > 0 {
            let shown = (app.scroll_offset() + app.list_viewport()).min(app.list_len());
            spans.push(Span::styled(
                format!("{}/{} lines", shown, app.list_len()),
                theme.muted_style(),
            ));
            spans.push(Span::raw("  |  "));
        }
        for (key, label) in [("o", ":Open  "), ("↑↓/jk", ":Scroll  "), ("?", ":Help  "), ("q", ":Quit")] {
            spans.push(Span::styled(key, Style::default().fg(theme.accent())));
            spans.push(Span::raw(label));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Status text for loads in flight: the newest file plus how many others are pending.
fn loading_status(loading: &[String]) -> Option<String> {
    let newest = loading.last()?;
    match loading.len() - 1 {
        0 => Some(format!("Loading {}…", newest)),
        others => Some(format!("Loading {}… (+{})", newest, others)),
    }
}

fn render_picker_overlay(frame: &mut Frame, app: &mut ViewerApp, theme: &Theme) {
    let area = centered_rect(80, 80, frame.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Select a JSON file (Enter to open, Esc to cancel)")
        .border_style(Style::default().fg(theme.accent()));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Current directory
            Constraint::Min(0),    // Entries
            Constraint::Length(1), // Error or hint
        ])
        .split(inner);

    let viewport = chunks[1].height as usize;
    app.set_picker_viewport(viewport);
    let Some(picker) = app.picker() else {
        return;
    };

    let dir_line = Paragraph::new(Span::styled(
        picker.dir().display().to_string(),
        theme.muted_style(),
    ));
    frame.render_widget(dir_line, chunks[0]);
    frame.render_widget(Paragraph::new(picker_lines(picker, viewport, theme)), chunks[1]);

    let status = match picker.error() {
        Some(error) => Span::styled(error.to_string(), Style::default().fg(ratatui::style::Color::Yellow)),
        None if picker.entries().iter().all(|e| e.kind != EntryKind::JsonFile) => {
            Span::styled("No JSON files here", theme.muted_style())
        }
        None => Span::styled(". toggles hidden files", theme.muted_style()),
    };
    frame.render_widget(Paragraph::new(status), chunks[2]);
}

fn picker_lines(picker: &FilePicker, viewport: usize, theme: &Theme) -> Vec<Line<'static>> {
    let entries = picker.entries();
    let range = calculate_visible_range(picker.scroll_offset(), viewport, entries.len());

    entries[range.clone()]
        .iter()
        .zip(range)
        .map(|(entry, index)| {
            let is_selected = index == picker.selected_index();
            let indicator = if is_selected { "▸ " } else { "  " };
            let (label, style) = match entry.kind {
                EntryKind::Parent | EntryKind::Directory => {
                    (format!("{}/", entry.name), theme.directory_style())
                }
                EntryKind::JsonFile => (entry.name.clone(), Style::default()),
            };
            let line = Line::from(vec![
                Span::styled(indicator, Style::default().fg(theme.accent())),
                Span::styled(label, style),
            ]);
            if is_selected {
                line.style(theme.selected_style())
            } else {
                line
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::PickerOptions;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::fs;
    use std::path::Path;
    use std::time::Duration;

    const REPORT: &str = r#"{"coveredLines":80,"executableLines":100,"lineCoverage":0.8,"targets":[{"buildProductPath":"/a/b/T.app","coveredLines":80,"executableLines":100,"files":[{"coveredLines":80,"executableLines":100,"functions":[{"coveredLines":1,"executableLines":1,"executionCount":3,"lineCoverage":1.0,"lineNumber":7,"name":"secretFunction()"}],"lineCoverage":0.8,"name":"F.swift","path":"/a/b/F.swift"}],"lineCoverage":0.8,"name":"T"}]}"#;

    fn buffer_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(app: &mut ViewerApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn app_in(dir: &Path) -> ViewerApp {
        ViewerApp::new(PickerOptions {
            start_dir: dir.to_path_buf(),
            show_hidden: false,
        })
    }

    fn loaded_app(dir: &Path, json: &str) -> ViewerApp {
        let path = dir.join("report.json");
        fs::write(&path, json).unwrap();
        let mut app = app_in(dir);
        app.start_load(path);
        assert!(app.block_on_load(Duration::from_secs(5)));
        app
    }

    #[test]
    fn test_empty_state_shows_button_and_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());

        let screen = draw(&mut app, 80, 12);

        assert!(screen.contains("Select a JSON file"));
        assert!(screen.contains("Select a JSON file to see the Code Coverage."));
        assert!(!screen.contains("Covered lines"));
    }

    #[test]
    fn test_loaded_state_shows_summary_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = loaded_app(dir.path(), REPORT);

        let screen = draw(&mut app, 80, 16);

        assert!(screen.contains("Code Coverage"));
        assert!(screen.contains("Covered lines: 80"));
        assert!(screen.contains("Executable lines: 100"));
        assert!(screen.contains("Total Coverage: 80.00%"));
        assert!(screen.contains("Target: T.app"));
        assert!(screen.contains("F.swift — 80.00% — 80 / 100"));
        assert!(!screen.contains("secretFunction"));
        assert!(!screen.contains("to see the Code Coverage"));
    }

    #[test]
    fn test_scrolled_list_hides_first_target() {
        let dir = tempfile::tempdir().unwrap();
        let targets: Vec<String> = (0..20)
            .map(|i| {
                format!(
                    r#"{{"buildProductPath":"/p/T{i}.app","coveredLines":1,"executableLines":2,"files":[{{"coveredLines":1,"executableLines":2,"functions":[],"lineCoverage":0.5,"name":"f{i}.swift","path":"/f"}}],"lineCoverage":0.5,"name":"T{i}"}}"#
                )
            })
            .collect();
        let json = format!(
            r#"{{"coveredLines":20,"executableLines":40,"lineCoverage":0.5,"targets":[{}]}}"#,
            targets.join(",")
        );
        let mut app = loaded_app(dir.path(), &json);

        let first = draw(&mut app, 60, 20);
        assert!(first.contains("Target: T0.app"));
        // 20 groups: 20 headers + 20 rows + 19 separators
        assert_eq!(app.list_len(), 59);

        let (total, viewport) = (app.list_len(), app.list_viewport());
        app.scroll_mut().scroll_to_bottom(total, viewport);
        let bottom = draw(&mut app, 60, 20);
        assert!(!bottom.contains("Target: T0.app"));
        assert!(bottom.contains("Target: T19.app"));
        assert!(bottom.contains("f19.swift — 50.00% — 1 / 2"));
    }

    #[test]
    fn test_picker_overlay_lists_json_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("coverage.json"), "{}").unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();
        let mut app = app_in(dir.path());
        app.request_load();

        let screen = draw(&mut app, 100, 30);

        assert!(screen.contains("coverage.json"));
        assert!(!screen.contains("readme.md"));
        assert!(screen.contains("Esc to cancel"));
    }

    #[test]
    fn test_help_overlay() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.set_view_mode(ViewMode::Help);

        let screen = draw(&mut app, 100, 30);
        assert!(screen.contains("Help (any key to close)"));
        assert!(screen.contains("Parent directory"));
    }

    #[test]
    fn test_loading_status_counts_other_loads() {
        assert_eq!(loading_status(&[]), None);
        assert_eq!(
            loading_status(&["a.json".to_string()]).as_deref(),
            Some("Loading a.json…")
        );
        assert_eq!(
            loading_status(&["a.json".to_string(), "b.json".to_string()]).as_deref(),
            Some("Loading b.json… (+1)")
        );
    }

    #[test]
    fn test_footer_shows_pending_load_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        app.start_load(dir.path().join("a.json"));
        app.start_load(dir.path().join("b.json"));

        let screen = draw(&mut app, 80, 12);

        assert!(screen.contains("Loading b.json… (+1)"));
    }

    #[test]
    fn test_flatten_separates_groups() {
        let theme = Theme::default();
        let groups = vec![
            TargetGroup {
                header: "A.app".into(),
                rows: vec![],
            },
            TargetGroup {
                header: "B.app".into(),
                rows: vec![],
            },
        ];

        let lines = flatten(&groups, &theme);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].spans.is_empty());
    }
}
