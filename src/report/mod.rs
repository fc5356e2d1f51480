//! Coverage report model and decoder.
//!
//! ```rust
//! use covview::report::decode;
//!
//! let json = br#"{"coveredLines":1,"executableLines":2,"lineCoverage":0.5,"targets":[]}"#;
//! let report = decode(json)?;
//! assert_eq!(report.executable_lines, 2);
//! # Ok::<(), covview::errors::DecodeError>(())
//! ```

pub mod decode;
pub mod model;

pub use decode::{decode, read_report};
pub use model::{FileCoverage, FunctionCoverage, Report, Target};
