//! Command-line argument parsing for the booklist CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use crate::state::{InvalidViewMode, ViewMode};

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui {
        /// Initial view mode
        mode: ViewMode,
    },
}

/// Argument errors that abort start-up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error(transparent)]
    InvalidMode(#[from] InvalidViewMode),
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: booklist [OPTIONS]

Options:
  --mode <all|private>  Initial view mode [default: all]
  -V, --version         Print version
  -h, --help            Print help

Environment:
  BOOKLIST_SCHEME   http or https [default: https]
  BOOKLIST_HOST     API host [default: books-api.example.com]
  BOOKLIST_USER_ID  User id in the API path [default: demo]
  BOOKLIST_LOG      Write logs to this file (RUST_LOG sets the filter)";

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use booklist::cli::args::{parse_args, CliCommand};
/// use booklist::state::ViewMode;
///
/// let args = vec!["booklist".to_string(), "--mode".to_string(), "private".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()).unwrap(),
///     CliCommand::RunTui { mode: ViewMode::Private }
/// );
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut mode = ViewMode::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--mode" => {
                let value = args
                    .next()
                    .ok_or_else(|| ArgsError::MissingValue("--mode".to_string()))?;
                mode = value.parse()?;
            }
            other => {
                if let Some(value) = other.strip_prefix("--mode=") {
                    mode = value.parse()?;
                }
            }
        }
    }

    Ok(CliCommand::RunTui { mode })
}
