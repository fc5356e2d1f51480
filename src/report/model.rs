//! Core data types for exported coverage reports.
//!
//! These mirror the JSON layout produced by the test-result export
//! pipeline one-to-one. Every field is required; unknown keys are ignored.
//! Values are trusted as given: nothing here re-derives `line_coverage`
//! or checks that covered lines fit within executable lines.
//!
//! # Types
//!
//! - [`Report`] - Whole-run totals plus one entry per build target
//! - [`Target`] - One build product (app, framework, test bundle)
//! - [`FileCoverage`] - One source file inside a target
//! - [`FunctionCoverage`] - One function inside a file (decoded, never rendered)

use serde::{Deserialize, Serialize};

/// Full coverage document for one test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub covered_lines: u64,
    pub executable_lines: u64,
    /// Fraction in `[0, 1]` as reported by the producer
    pub line_coverage: f64,
    pub targets: Vec<Target>,
}

/// Coverage for a single build product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    /// Absolute product path, e.g. `/Users/x/Build/Products/Debug/App.app`
    pub build_product_path: String,
    pub covered_lines: u64,
    pub executable_lines: u64,
    pub files: Vec<FileCoverage>,
    pub line_coverage: f64,
    pub name: String,
}

/// Coverage for one source file within a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCoverage {
    pub covered_lines: u64,
    pub executable_lines: u64,
    pub functions: Vec<FunctionCoverage>,
    pub line_coverage: f64,
    /// Display name; not unique across targets
    pub name: String,
    pub path: String,
}

/// Coverage for one function or method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCoverage {
    pub covered_lines: u64,
    pub executable_lines: u64,
    pub execution_count: u64,
    pub line_coverage: f64,
    /// 1-based source line
    pub line_number: u64,
    pub name: String,
}

impl Report {
    /// Number of files across all targets.
    pub fn file_count(&self) -> usize {
        self.targets.iter().map(|t| t.files.len()).sum()
    }

    /// Number of functions across all files of all targets.
    pub fn function_count(&self) -> usize {
        self.targets
            .iter()
            .flat_map(|t| t.files.iter())
            .map(|f| f.functions.len())
            .sum()
    }
}
