//! Decoding coverage reports from bytes and files.
//!
//! Decoding is all-or-nothing: either the whole document matches the
//! report shape or the call fails. There is no default substitution for
//! absent fields and no partial result for a malformed record.

use super::model::Report;
use crate::errors::DecodeError;
use std::fs;
use std::path::Path;

/// Decode a report from raw JSON bytes.
///
/// Pure function of its input: decoding the same bytes twice yields
/// structurally equal reports.
pub fn decode(bytes: &[u8]) -> Result<Report, DecodeError> {
    let report = serde_json::from_slice::<Report>(bytes)?;
    Ok(report)
}

/// Read the file at `path` once and decode it.
pub fn read_report(path: &Path) -> Result<Report, DecodeError> {
    let bytes = fs::read(path).map_err(|e| DecodeError::io(path, e))?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    decode(&bytes)
}
