//! API-specific error types
//!
//! Classifies failed calls and extracts the server's error detail.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use tasktime_domain::constants::GENERIC_REQUEST_FAILURE;
use tasktime_domain::TaskTimeError;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Missing or rejected credentials (401, 403)
    Authentication,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx except auth)
    Client,
    /// Network/connection errors and timeouts
    Network,
    /// Response body did not match the expected shape
    Decode,
    /// Configuration errors
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Client error ({status}): {message}")]
    Client { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Local token storage could not be read.
    #[error("Token storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Client { .. } => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Config(_) | Self::Storage(_) => ApiErrorCategory::Config,
        }
    }

    /// Classify a non-2xx response by status code.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = extract_detail(body);
        match status {
            401 | 403 => Self::Auth(message),
            500..=599 => Self::Server { status, message },
            _ => Self::Client { status, message },
        }
    }
}

impl From<ApiError> for TaskTimeError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Auth(message) => Self::Auth(message),
            ApiError::Server { status, message } | ApiError::Client { status, message } => {
                Self::Remote { status, message }
            }
            ApiError::Network(message) => Self::Network(message),
            ApiError::Timeout(_) => Self::Network("Request timed out".into()),
            ApiError::Decode(message) => Self::Parse(message),
            ApiError::Config(message) => Self::Config(message),
            ApiError::Storage(message) => Self::Storage(message),
        }
    }
}

impl From<TaskTimeError> for ApiError {
    fn from(err: TaskTimeError) -> Self {
        match err {
            TaskTimeError::Auth(message) => Self::Auth(message),
            TaskTimeError::Remote { status, message } if status >= 500 => {
                Self::Server { status, message }
            }
            TaskTimeError::Remote { status, message } => Self::Client { status, message },
            TaskTimeError::Parse(message) => Self::Decode(message),
            TaskTimeError::Config(message) | TaskTimeError::Validation(message) => {
                Self::Config(message)
            }
            TaskTimeError::Storage(message) => Self::Storage(message),
            TaskTimeError::Network(message) | TaskTimeError::Internal(message) => {
                Self::Network(message)
            }
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Pull a human-readable message out of an error response body.
///
/// A string `detail` is returned verbatim. A list of validation items is
/// joined from their `msg` fields. Anything else yields the generic
/// failure message.
pub fn extract_detail(body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body).ok().and_then(|parsed| parsed.detail);

    match detail {
        Some(Value::String(message)) if !message.is_empty() => message,
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                GENERIC_REQUEST_FAILURE.to_string()
            } else {
                messages.join("; ")
            }
        }
        _ => GENERIC_REQUEST_FAILURE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        assert_eq!(ApiError::Auth("test".into()).category(), ApiErrorCategory::Authentication);
        assert_eq!(
            ApiError::Server { status: 502, message: "test".into() }.category(),
            ApiErrorCategory::Server
        );
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(1)).category(),
            ApiErrorCategory::Network
        );
        assert_eq!(ApiError::Decode("test".into()).category(), ApiErrorCategory::Decode);
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(ApiError::from_status(401, ""), ApiError::Auth(_)));
        assert!(matches!(ApiError::from_status(403, ""), ApiError::Auth(_)));
        assert!(matches!(ApiError::from_status(404, ""), ApiError::Client { status: 404, .. }));
        assert!(matches!(ApiError::from_status(503, ""), ApiError::Server { status: 503, .. }));
    }

    #[test]
    fn test_string_detail_is_verbatim() {
        assert_eq!(extract_detail(r#"{"detail": "Task not found"}"#), "Task not found");
    }

    #[test]
    fn test_list_detail_joins_messages() {
        let body = r#"{"detail": [
            {"loc": ["body", "title"], "msg": "field required", "type": "missing"},
            {"loc": ["body", "priority"], "msg": "invalid choice", "type": "enum"}
        ]}"#;
        assert_eq!(extract_detail(body), "field required; invalid choice");
    }

    #[test]
    fn test_missing_or_garbled_detail_falls_back() {
        assert_eq!(extract_detail(""), GENERIC_REQUEST_FAILURE);
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), GENERIC_REQUEST_FAILURE);
        assert_eq!(extract_detail(r#"{"error": "nope"}"#), GENERIC_REQUEST_FAILURE);
        assert_eq!(extract_detail(r#"{"detail": [{"loc": []}]}"#), GENERIC_REQUEST_FAILURE);
    }

    #[test]
    fn test_conversion_into_domain_error() {
        let remote: TaskTimeError =
            ApiError::Client { status: 400, message: "Task is already done".into() }.into();
        assert_eq!(remote.user_message(), "Task is already done");

        let auth: TaskTimeError = ApiError::Auth("Could not validate credentials".into()).into();
        assert!(auth.is_auth());

        let decode: TaskTimeError = ApiError::Decode("missing field `id`".into()).into();
        assert_eq!(decode.user_message(), GENERIC_REQUEST_FAILURE);
    }
}
