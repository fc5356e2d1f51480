//! Logging and crash reporting.
//!
//! Install the panic hook and logger at startup:
//!
//! ```ignore
//! use covview::observability::{init_logging, install_panic_hook, LogTarget};
//!
//! fn main() -> anyhow::Result<()> {
//!     install_panic_hook();
//!     init_logging(log::LevelFilter::Warn, LogTarget::Stderr)?;
//!     // ... rest of application
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod panic_hook;

pub use logging::{default_log_file, init_logging, viewer_log_target, LogTarget};
pub use panic_hook::{install_panic_hook, is_tui_active, set_tui_active};
