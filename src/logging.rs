//! Tracing initialisation.
//!
//! The TUI owns stdout, so nothing is logged unless `BOOKLIST_LOG` names a
//! file. `RUST_LOG` filters as usual and defaults to `info`.

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "BOOKLIST_LOG";

const DEFAULT_FILTER: &str = "info";

/// Log file path from the environment, if logging is enabled.
pub fn log_path_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Install the file subscriber when `BOOKLIST_LOG` is set.
///
/// Returns the path being written to. Failing to open the file only prints a
/// warning; the app runs without logs.
pub fn init_tracing() -> Option<PathBuf> {
    let log_path = log_path_from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to open log file {}: {}", log_path.display(), e);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok();

    installed.then_some(log_path)
}
