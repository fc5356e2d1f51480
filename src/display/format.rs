//! Pure formatting helpers shared by every frontend.

/// Format a coverage ratio as a percentage with two fraction digits.
///
/// `0.8675` becomes `"86.75%"`, `1.0` becomes `"100.00%"`.
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Short display name of a build product: its last non-empty path segment.
///
/// Falls back to the full string when there is no such segment.
pub fn short_name(build_product_path: &str) -> &str {
    build_product_path
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(build_product_path)
}

/// "covered / executable" line counts.
pub fn format_line_counts(covered: u64, executable: u64) -> String {
    format!("{} / {}", covered, executable)
}
