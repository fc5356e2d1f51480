//! Plain-text rendering of a [`DisplayTree`].

use super::OutputFormatter;
use crate::display::tree::{DisplayTree, FileRow, TargetGroup};
use std::io::{self, Write};

/// Write the tree as text lines.
///
/// ```text
/// Code Coverage
/// Covered lines: 80
/// Executable lines: 100
/// Total Coverage: 80.00%
///
/// Target: T.app
///   F.swift — 80.00% — 80 / 100
/// ```
pub fn write_tree(
    tree: &DisplayTree,
    formatter: &dyn OutputFormatter,
    out: &mut impl Write,
) -> io::Result<()> {
    match tree {
        DisplayTree::Prompt(prompt) => writeln!(out, "{}", formatter.dim(prompt)),
        DisplayTree::Coverage { summary, groups } => {
            writeln!(out, "{}", formatter.header(&summary.title))?;
            writeln!(out, "{}", summary.covered_lines)?;
            writeln!(out, "{}", summary.executable_lines)?;
            writeln!(out, "{}", summary.total_coverage)?;
            for group in groups {
                writeln!(out)?;
                write_group(group, formatter, out)?;
            }
            Ok(())
        }
    }
}

fn write_group(
    group: &TargetGroup,
    formatter: &dyn OutputFormatter,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(
        out,
        "{}{}",
        formatter.info("Target: "),
        formatter.bold(&group.header)
    )?;
    for row in &group.rows {
        write_row(row, formatter, out)?;
    }
    Ok(())
}

fn write_row(row: &FileRow, formatter: &dyn OutputFormatter, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "  {} — {} — {}",
        formatter.bold(&row.name),
        row.coverage,
        row.line_counts
    )
}

/// Render the tree to a `String` without styling.
pub fn to_plain_string(tree: &DisplayTree) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_tree(tree, &super::PlainFormatter, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
