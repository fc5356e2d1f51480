//! `env_logger` setup.
//!
//! The interactive viewer owns the terminal, so its log goes to a file.
//! `RUST_LOG` always wins over the configured level.

use anyhow::{Context, Result};
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Drop everything; used when no log file can be opened
    Discard,
}

/// Default log file for the interactive viewer: `<cache_dir>/covview/covview.log`
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("covview").join("covview.log"))
}

/// Pick the viewer's log target, falling back to discarding records.
pub fn viewer_log_target(configured: Option<PathBuf>) -> LogTarget {
    configured
        .or_else(default_log_file)
        .map(LogTarget::File)
        .unwrap_or(LogTarget::Discard)
}

/// Initialize the global logger. Later calls are ignored.
pub fn init_logging(level: LevelFilter, target: LogTarget) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    match target {
        LogTarget::Stderr => {
            builder.target(env_logger::Target::Stderr);
        }
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            builder.target(env_logger::Target::Pipe(file));
        }
        LogTarget::Discard => {
            builder.target(env_logger::Target::Pipe(Box::new(std::io::sink())));
        }
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<Box<dyn Write + Send>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    Ok(Box::new(file))
}
