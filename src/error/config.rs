use thiserror::Error;

/// Errors from [`crate::config::ApiConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unsupported scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("API host must not be empty")]
    EmptyHost,

    #[error("User id must not be empty")]
    EmptyUserId,

    #[error("User id '{0}' may only contain letters, digits, '-' and '_'")]
    InvalidUserId(String),
}
