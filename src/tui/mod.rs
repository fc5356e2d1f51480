//! Interactive terminal viewer for coverage reports.
//!
//! The screen shows a "Select a JSON file" button above either a prompt or
//! the loaded report. Reports are read on background threads; the event
//! loop applies finished loads between frames, so the UI thread is the only
//! writer of the displayed state.
//!
//! # Examples
//!
//! ```rust,no_run
//! use covview::tui::{app::PickerOptions, CoverageExplorer};
//!
//! let mut explorer = CoverageExplorer::new(PickerOptions {
//!     start_dir: std::env::current_dir()?,
//!     show_hidden: false,
//! })?;
//! explorer.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod actions;
pub mod app;
pub mod layout;
pub mod list_state;
pub mod navigation;
pub mod picker;
pub mod theme;
pub mod view;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::observability::set_tui_active;
use app::{PickerOptions, ViewerApp};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Coverage viewer TUI manager
pub struct CoverageExplorer {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: ViewerApp,
    restored: bool,
}

impl CoverageExplorer {
    /// Enter raw mode and the alternate screen.
    pub fn new(picker_options: PickerOptions) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        set_tui_active(true);

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app: ViewerApp::new(picker_options),
            restored: false,
        })
    }

    /// Run the event loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        log::info!("Coverage viewer started");

        loop {
            self.app.tick();

            let app = &mut self.app;
            self.terminal.draw(|f| view::render(f, app))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if navigation::handle_key(&mut self.app, key)? {
                        break;
                    }
                }
            }
        }

        log::info!("Coverage viewer closed");
        self.cleanup()
    }

    /// Restore the terminal
    fn cleanup(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for CoverageExplorer {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
