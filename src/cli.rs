use crate::formatting::ColorMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Color choice for `print`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal (default)
    Auto,
    /// Always emit ANSI colors
    Always,
    /// Never emit ANSI colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "covview")]
#[command(about = "Code coverage report viewer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Write the log to this file instead of the default location
    #[arg(long = "log-file", env = "COVVIEW_LOG_FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Config file to use instead of discovering .covview.toml
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Directory the file picker opens in
    #[arg(long = "start-dir", global = true)]
    pub start_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a coverage report as text and exit
    Print {
        /// Coverage JSON file
        file: PathBuf,

        /// Disable styling (same as --color never)
        #[arg(long, conflicts_with = "color")]
        plain: bool,

        /// When to use colors
        #[arg(long, value_enum)]
        color: Option<ColorChoice>,
    },
}

impl Commands {
    /// Color mode requested on the command line, if any
    pub fn color_override(&self) -> Option<ColorMode> {
        match self {
            Commands::Print { plain: true, .. } => Some(ColorMode::Never),
            Commands::Print { color, .. } => color.map(ColorMode::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_starts_viewer() {
        let cli = Cli::try_parse_from(["covview", "-vv", "--start-dir", "/tmp"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbosity, 2);
        assert_eq!(cli.start_dir, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_print_plain() {
        let cli = Cli::try_parse_from(["covview", "print", "r.json", "--plain"]).unwrap();
        let command = cli.command.unwrap();
        assert_eq!(command.color_override(), Some(ColorMode::Never));
        assert!(matches!(command, Commands::Print { ref file, .. } if file == &PathBuf::from("r.json")));
    }

    #[test]
    fn test_print_color_choice() {
        let cli = Cli::try_parse_from(["covview", "print", "r.json", "--color", "always"]).unwrap();
        assert_eq!(cli.command.unwrap().color_override(), Some(ColorMode::Always));

        let cli = Cli::try_parse_from(["covview", "print", "r.json"]).unwrap();
        assert_eq!(cli.command.unwrap().color_override(), None);
    }

    #[test]
    fn test_plain_conflicts_with_color() {
        assert!(
            Cli::try_parse_from(["covview", "print", "r.json", "--plain", "--color", "always"])
                .is_err()
        );
    }
}
