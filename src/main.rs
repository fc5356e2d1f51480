use anyhow::{Context, Result};
use clap::Parser;
use covview::cli::{Cli, Commands};
use covview::config::{discover_config, load_config_from, Overrides, Settings, ViewerConfig};
use covview::display::{render, DisplayState};
use covview::formatting::{formatter_for, write_tree};
use covview::observability::{init_logging, install_panic_hook, viewer_log_target, LogTarget};
use covview::report::read_report;
use covview::tui::{app::PickerOptions, CoverageExplorer};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = resolve_config(cli.config.as_deref(), &cwd)?;
    let overrides = Overrides {
        verbosity: cli.verbosity,
        log_file: cli.log_file.clone(),
        start_dir: cli.start_dir.clone(),
        color: cli.command.as_ref().and_then(Commands::color_override),
    };
    let settings = Settings::resolve(&overrides, &config, cwd);

    match cli.command {
        Some(Commands::Print { file, .. }) => handle_print_command(&file, &settings),
        None => handle_viewer(settings),
    }
}

/// Explicit `--config` must load; otherwise discover `.covview.toml` or use defaults.
fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<ViewerConfig> {
    match explicit {
        Some(path) => load_config_from(path).context("Failed to load config"),
        None => Ok(discover_config(cwd.to_path_buf()).unwrap_or_default()),
    }
}

fn handle_print_command(file: &Path, settings: &Settings) -> Result<()> {
    init_logging(settings.log_level, LogTarget::Stderr)?;

    let report = read_report(file)
        .with_context(|| format!("Failed to load coverage report {}", file.display()))?;
    log::info!(
        "Printing {} ({} targets, {} files, {} functions)",
        file.display(),
        report.targets.len(),
        report.file_count(),
        report.function_count()
    );

    let tree = render(&DisplayState::Loaded(Arc::new(report)));
    let formatter = formatter_for(settings.color.with_env_overrides());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tree(&tree, formatter.as_ref(), &mut out)?;
    out.flush()?;
    Ok(())
}

fn handle_viewer(settings: Settings) -> Result<()> {
    if let Err(e) = init_logging(settings.log_level, viewer_log_target(settings.log_file.clone())) {
        eprintln!("Warning: {:#}. Logging disabled.", e);
        init_logging(settings.log_level, LogTarget::Discard)?;
    }
    log::debug!("Resolved settings: {:?}", settings);

    let mut explorer = CoverageExplorer::new(PickerOptions {
        start_dir: settings.start_dir,
        show_hidden: settings.show_hidden,
    })
    .context("Failed to initialize terminal")?;
    explorer.run()
}
