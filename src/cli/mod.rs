//! CLI module for booklist.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and help display
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle command-line
//! flags before initializing the TUI:
//!
//! ```ignore
//! use booklist::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let mode = run_cli_command(command);
//! // Only RunTui returns; continue to TUI with `mode`
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, USAGE};
pub use version::{handle_help_command, handle_version_command, version_line, VERSION};

use crate::state::ViewMode;

/// Run a CLI command if applicable.
///
/// Returns the initial view mode for `RunTui`. `Version` and `Help` print and
/// exit the process.
pub fn run_cli_command(command: CliCommand) -> ViewMode {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::RunTui { mode } => mode,
    }
}
