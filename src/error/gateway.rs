//! Gateway error types.

use thiserror::Error;

use crate::traits::HttpError;

/// Errors raised by [`crate::gateway::HttpGateway`].
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The server answered with a non-2xx status.
    ///
    /// `message` is the error body's JSON `message` field when present,
    /// otherwise the status text.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The body was not valid JSON for the expected type.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request payload could not be encoded.
    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl GatewayError {
    /// HTTP status for [`GatewayError::Status`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_message_only() {
        let err = GatewayError::Status {
            status: 404,
            message: "User not found".to_string(),
        };
        assert_eq!(err.to_string(), "User not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let err: GatewayError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert_eq!(err.to_string(), "Connection failed: refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_decode_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: GatewayError = json_err.into();
        assert!(matches!(err, GatewayError::Decode(_)));
        assert!(err.to_string().starts_with("Invalid response body"));
    }
}
