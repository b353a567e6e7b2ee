use std::fmt;
use std::str::FromStr;

use crate::models::Book;

/// Which repository call backs the displayed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    All,
    Private,
}

impl ViewMode {
    pub const ALL_MODES: [ViewMode; 2] = [ViewMode::All, ViewMode::Private];

    /// Lowercase label, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::All => "all",
            ViewMode::Private => "private",
        }
    }

    /// Human-readable tab label.
    pub fn title(self) -> &'static str {
        match self {
            ViewMode::All => "All books",
            ViewMode::Private => "Private books",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::All => ViewMode::Private,
            ViewMode::Private => ViewMode::All,
        }
    }

    /// Position in [`ViewMode::ALL_MODES`].
    pub fn index(self) -> usize {
        match self {
            ViewMode::All => 0,
            ViewMode::Private => 1,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown view mode label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown view mode '{0}' (expected 'all' or 'private')")]
pub struct InvalidViewMode(pub String);

impl FromStr for ViewMode {
    type Err = InvalidViewMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ViewMode::All),
            "private" => Ok(ViewMode::Private),
            _ => Err(InvalidViewMode(s.to_string())),
        }
    }
}

/// Everything the views render, owned by [`super::BookStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Current list, replaced wholesale on every load
    pub books: Vec<Book>,
    /// True while a load or add is in flight
    pub is_loading: bool,
    /// Most recent failure, cleared when the next operation starts
    pub error: Option<String>,
    /// Which list `books` comes from
    pub view_mode: ViewMode,
    /// Number of private books, for the header
    pub private_count: usize,
}

impl ViewState {
    pub fn with_view_mode(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            ..Self::default()
        }
    }
}
