//! API configuration.
//!
//! The books API lives at `{scheme}://{host}/v1/books/{user_id}`. The three
//! parts come from the environment with fallbacks suitable for a demo
//! deployment.
//!
//! # Example
//!
//! ```
//! use booklist::config::ApiConfig;
//!
//! let config = ApiConfig::default()
//!     .with_host("localhost:8080")
//!     .with_scheme("http")
//!     .with_user_id("alice");
//! assert_eq!(config.base_url(), "http://localhost:8080/v1/books/alice");
//! ```

use crate::error::ConfigError;

/// Environment variable overriding the URL scheme.
pub const ENV_SCHEME: &str = "BOOKLIST_SCHEME";
/// Environment variable overriding the API host (optionally with port).
pub const ENV_HOST: &str = "BOOKLIST_HOST";
/// Environment variable overriding the user path segment.
pub const ENV_USER_ID: &str = "BOOKLIST_USER_ID";

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_HOST: &str = "books-api.example.com";
pub const DEFAULT_USER_ID: &str = "demo";

/// Where the books API lives and whose books to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `http` or `https`
    pub scheme: String,
    /// Host name, optionally with `:port`
    pub host: String,
    /// Static user identifier embedded in the URL path
    pub user_id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Read the configuration from `BOOKLIST_*` environment variables.
    ///
    /// Unset or blank variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            scheme: read(ENV_SCHEME, DEFAULT_SCHEME).to_ascii_lowercase(),
            host: read(ENV_HOST, DEFAULT_HOST),
            user_id: read(ENV_USER_ID, DEFAULT_USER_ID),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scheme != "http" && self.scheme != "https" {
            return Err(ConfigError::UnsupportedScheme(self.scheme.clone()));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.user_id.is_empty() {
            return Err(ConfigError::EmptyUserId);
        }
        let valid_user = self
            .user_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid_user {
            return Err(ConfigError::InvalidUserId(self.user_id.clone()));
        }
        Ok(())
    }

    /// `{scheme}://{host}/v1/books/{user_id}`, with any trailing slash on
    /// the host dropped.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}/v1/books/{}",
            self.scheme,
            self.host.trim_end_matches('/'),
            self.user_id
        )
    }
}
