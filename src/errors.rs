//! Error types for covview operations.
//!
//! Decoding failures fall into two categories that callers may branch on:
//!
//! - `Io`: the report bytes could not be obtained (missing file, permissions,
//!   device errors)
//! - `Parse`: bytes were read but are not JSON, or the JSON does not match the
//!   report shape (missing field, wrong type)
//!
//! The underlying message is kept for diagnostics only. Control flow should use
//! [`DecodeError::kind`], never the message text.
//!
//! # Example
//!
//! ```rust
//! use covview::errors::DecodeErrorKind;
//! use covview::report::decode;
//!
//! let err = decode(br#"{"coveredLines":"eighty"}"#).unwrap_err();
//! assert_eq!(err.kind(), DecodeErrorKind::Parse);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to turn a byte source into a [`Report`](crate::report::Report).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The byte source could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bytes were read but do not form a valid report
    #[error("invalid coverage report: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

/// Category of a [`DecodeError`], independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    Io,
    Parse,
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "io"),
            Self::Parse => write!(f, "parse"),
        }
    }
}

impl DecodeError {
    /// Create an I/O error for the given source path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::Io { .. } => DecodeErrorKind::Io,
            Self::Parse { .. } => DecodeErrorKind::Parse,
        }
    }

    /// Raw message of the underlying error, kept for logs.
    pub fn message(&self) -> String {
        match self {
            Self::Io { source, .. } => source.to_string(),
            Self::Parse { source } => source.to_string(),
        }
    }

    /// Path of the byte source, when the error came from a file read
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Parse { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse { source }
    }
}

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
