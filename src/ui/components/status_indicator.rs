//! Status Indicator Component
//!
//! Spinner, error, and hint lines used by the list and the status bar.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_LOADING};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Error message
    Error { message: String },
    /// Dimmed informational text
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as one line.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => Line::from(vec![
            Span::styled(
                format!(" {} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_LOADING),
            ),
            Span::styled(message.clone(), Style::default().fg(COLOR_LOADING)),
        ]),
        StatusIndicatorType::Error { message } => Line::from(vec![
            Span::styled(" \u{2717} ", Style::default().fg(COLOR_ERROR)), // X mark
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        StatusIndicatorType::Info { message } => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(COLOR_DIM),
        )),
    }
}
