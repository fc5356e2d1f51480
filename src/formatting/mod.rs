//! Styled text output for non-interactive rendering.

pub mod text;

use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

pub use text::write_tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }

    /// Apply NO_COLOR / CLICOLOR / CLICOLOR_FORCE on top of this mode.
    pub fn with_env_overrides(self) -> Self {
        let mut mode = self;

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            mode = Self::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                mode = Self::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                mode = Self::Always;
            }
        }

        mode
    }
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    fn info(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    color: ColorMode,
}

impl ColoredFormatter {
    pub fn new(color: ColorMode) -> Self {
        // Set colored control based on configuration
        colored::control::set_override(color.should_use_color());
        Self { color }
    }

    fn enabled(&self) -> bool {
        self.color.should_use_color()
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        if self.enabled() {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.enabled() {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.enabled() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn info(&self, text: &str) -> String {
        if self.enabled() {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }

    fn info(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Pick a formatter for the resolved color mode.
pub fn formatter_for(color: ColorMode) -> Box<dyn OutputFormatter> {
    if color.should_use_color() {
        Box::new(ColoredFormatter::new(color))
    } else {
        Box::new(PlainFormatter)
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatter_is_identity() {
        let f = PlainFormatter;
        assert_eq!(f.header("Code Coverage"), "Code Coverage");
        assert_eq!(f.bold("T.app"), "T.app");
        assert_eq!(f.dim("x"), "x");
        assert_eq!(f.info("y"), "y");
    }

    #[test]
    fn test_never_mode_disables_color() {
        assert!(!ColorMode::Never.should_use_color());
        assert!(ColorMode::Always.should_use_color());
    }
}
