// Export modules for library usage
pub mod cli;
pub mod config;
pub mod display;
pub mod errors;
pub mod formatting;
pub mod loader;
pub mod observability;
pub mod report;
pub mod tui;

// Re-export commonly used types
pub use crate::display::{render, DisplayState, DisplayTree, StateStore};
pub use crate::errors::{ConfigError, DecodeError, DecodeErrorKind};
pub use crate::loader::{LoadOutcome, Loader};
pub use crate::report::{decode, read_report, FileCoverage, FunctionCoverage, Report, Target};
