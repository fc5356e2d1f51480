//! Viewer configuration.
//!
//! Settings come from three layers, highest precedence first: command-line
//! flags, an optional `.covview.toml` file, built-in defaults. The file only
//! tunes the viewer itself; nothing about a loaded report is ever persisted.

mod loader;

pub use loader::{
    directory_ancestors, discover_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};

use crate::formatting::ColorMode;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Contents of `.covview.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub picker: PickerConfig,
    pub log: LogConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Directory the file picker opens in (defaults to the working directory)
    pub start_dir: Option<PathBuf>,
    /// List dot-files and dot-directories
    pub show_hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub level: Option<String>,
    /// Log destination for the interactive viewer
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: ColorMode,
}

/// Values supplied on the command line. `None` / zero means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub verbosity: u8,
    pub log_file: Option<PathBuf>,
    pub start_dir: Option<PathBuf>,
    pub color: Option<ColorMode>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub start_dir: PathBuf,
    pub show_hidden: bool,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub color: ColorMode,
}

impl Settings {
    /// Merge CLI overrides over file config over defaults. Pure.
    pub fn resolve(overrides: &Overrides, config: &ViewerConfig, cwd: PathBuf) -> Self {
        let start_dir = overrides
            .start_dir
            .clone()
            .or_else(|| config.picker.start_dir.clone())
            .unwrap_or(cwd);

        let log_level = if overrides.verbosity > 0 {
            level_from_verbosity(overrides.verbosity)
        } else {
            config
                .log
                .level
                .as_deref()
                .and_then(|s| s.parse::<LevelFilter>().ok())
                .unwrap_or(LevelFilter::Warn)
        };

        Self {
            start_dir,
            show_hidden: config.picker.show_hidden,
            log_level,
            log_file: overrides
                .log_file
                .clone()
                .or_else(|| config.log.file.clone()),
            color: overrides.color.unwrap_or(config.display.color),
        }
    }
}

/// Map `-v` occurrences to a log level
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
