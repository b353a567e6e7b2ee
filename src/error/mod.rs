//! Error types for the book-list client.
//!
//! - [`GatewayError`] - failures talking to the books API
//! - [`ConfigError`] - invalid API configuration
//!
//! Transport failures below the gateway are [`crate::traits::HttpError`].
//! None of these escape the state container at runtime; they are turned
//! into the user-facing error line or a silent empty fallback there.

mod config;
mod gateway;

pub use config::ConfigError;
pub use gateway::GatewayError;

/// Result alias for gateway and repository operations.
pub type ApiResult<T> = Result<T, GatewayError>;
