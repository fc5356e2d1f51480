//! Display state and its rendering rules.
//!
//! - [`state`] - the observable `Empty` / `Loaded` state and its store
//! - [`tree`] - pure mapping from state to a display tree
//! - [`format`] - percentage and product-name formatting

pub mod format;
pub mod state;
pub mod tree;

pub use format::{format_percentage, short_name};
pub use state::{DisplayState, StateStore};
pub use tree::{render, DisplayTree, FileRow, Summary, TargetGroup};
