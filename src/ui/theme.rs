//! Color theme constants for the book list UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Private count badge
pub const COLOR_PRIVATE: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Loading spinner
pub const COLOR_LOADING: Color = Color::Yellow;

/// Error text
pub const COLOR_ERROR: Color = Color::Red;
