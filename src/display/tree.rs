//! Mapping from [`DisplayState`] to a frontend-neutral display tree.
//!
//! The tree carries the final strings shown to the user so the terminal
//! viewer and the text printer agree on every number. Targets and files keep
//! report order; functions are decoded but intentionally not rendered.

use super::format::{format_line_counts, format_percentage, short_name};
use super::state::DisplayState;
use crate::report::{FileCoverage, Report, Target};

/// Placeholder shown before any report has loaded
pub const PROMPT: &str = "Select a JSON file to see the Code Coverage.";

/// Heading of the summary block
pub const TITLE: &str = "Code Coverage";

/// Label of the load button
pub const OPEN_BUTTON: &str = "Select a JSON file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayTree {
    /// Single prompt line for the empty state
    Prompt(String),
    /// Summary block followed by one group per target
    Coverage {
        summary: Summary,
        groups: Vec<TargetGroup>,
    },
}

/// Whole-report totals, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    /// `"Covered lines: 80"`
    pub covered_lines: String,
    /// `"Executable lines: 100"`
    pub executable_lines: String,
    /// `"Total Coverage: 80.00%"`
    pub total_coverage: String,
}

impl Summary {
    /// Lines in display order
    pub fn lines(&self) -> [&str; 4] {
        [
            self.title.as_str(),
            self.covered_lines.as_str(),
            self.executable_lines.as_str(),
            self.total_coverage.as_str(),
        ]
    }
}

/// One target section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetGroup {
    /// Short product name, rendered in emphasis
    pub header: String,
    pub rows: Vec<FileRow>,
}

/// One file line inside a target section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    /// File name, rendered in emphasis
    pub name: String,
    /// `"80.00%"`
    pub coverage: String,
    /// `"80 / 100"`
    pub line_counts: String,
}

impl FileRow {
    /// Compact single-line form: `"F.swift — 80.00% — 80 / 100"`.
    pub fn line(&self) -> String {
        format!("{} — {} — {}", self.name, self.coverage, self.line_counts)
    }
}

/// Build the display tree for a state. Pure.
pub fn render(state: &DisplayState) -> DisplayTree {
    match state {
        DisplayState::Empty => DisplayTree::Prompt(PROMPT.to_string()),
        DisplayState::Loaded(report) => render_report(report),
    }
}

fn render_report(report: &Report) -> DisplayTree {
    DisplayTree::Coverage {
        summary: summarize(report),
        groups: report.targets.iter().map(group_target).collect(),
    }
}

fn summarize(report: &Report) -> Summary {
    Summary {
        title: TITLE.to_string(),
        covered_lines: format!("Covered lines: {}", report.covered_lines),
        executable_lines: format!("Executable lines: {}", report.executable_lines),
        total_coverage: format!(
            "Total Coverage: {}",
            format_percentage(report.line_coverage)
        ),
    }
}

fn group_target(target: &Target) -> TargetGroup {
    TargetGroup {
        header: short_name(&target.build_product_path).to_string(),
        rows: target.files.iter().map(file_row).collect(),
    }
}

fn file_row(file: &FileCoverage) -> FileRow {
    FileRow {
        name: file.name.clone(),
        coverage: format_percentage(file.line_coverage),
        line_counts: format_line_counts(file.covered_lines, file.executable_lines),
    }
}
