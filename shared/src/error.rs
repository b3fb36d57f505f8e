//! Error taxonomy for calls against the admin backend.
//!
//! Every failure a view can observe is one of these variants. `code()` keeps a
//! stable machine-readable tag so log lines stay greppable.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the body's `message` field, if any.
    #[error("{}", .message.as_deref().unwrap_or("request failed"))]
    Status { status: u16, message: Option<String> },

    /// 2xx response carrying `success: false`.
    #[error("{}", .message.as_deref().unwrap_or("request was rejected"))]
    Rejected { message: Option<String> },

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    /// Refused locally before any request was sent.
    #[error("{0}")]
    Invalid(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn code(&self) -> String {
        match self {
            ApiError::Network(_) => "NETWORK_ERROR".to_string(),
            ApiError::Status { status, .. } => format!("HTTP_{}", status),
            ApiError::Rejected { .. } => "REJECTED".to_string(),
            ApiError::Decode(_) => "PARSE_ERROR".to_string(),
            ApiError::Encode(_) => "SERIALIZE_ERROR".to_string(),
            ApiError::Invalid(_) => "VALIDATION_ERROR".to_string(),
        }
    }

    /// Message supplied by the backend, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }

    /// Message to show the admin: a local validation message, else the
    /// backend message, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        if let ApiError::Invalid(message) = self {
            return message.clone();
        }
        self.server_message()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401, .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Minimal shape shared by every backend reply, used to detect failures
/// before decoding the endpoint-specific body.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReplyStatus {
    pub success: Option<bool>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ApiError::Network("down".into()).code(), "NETWORK_ERROR");
        assert_eq!(ApiError::Status { status: 404, message: None }.code(), "HTTP_404");
        assert_eq!(ApiError::Rejected { message: None }.code(), "REJECTED");
        assert_eq!(ApiError::Decode("eof".into()).code(), "PARSE_ERROR");
    }

    #[test]
    fn test_message_fallbacks() {
        let err = ApiError::Status { status: 401, message: Some("Invalid credentials".into()) };
        assert_eq!(err.message_or("Login failed"), "Invalid credentials");
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(err.is_unauthorized());

        let err = ApiError::Rejected { message: Some("  ".into()) };
        assert_eq!(err.message_or("Login failed"), "Login failed");

        let err = ApiError::Network("offline".into());
        assert_eq!(err.server_message(), None);
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_validation_message_is_shown_as_is() {
        let err = ApiError::Invalid("Enter a base price greater than zero".into());
        assert_eq!(err.message_or("Could not update the order"), "Enter a base price greater than zero");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }
}
