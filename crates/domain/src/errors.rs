//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::GENERIC_REQUEST_FAILURE;

/// Main error type for tasktime
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TaskTimeError {
    /// Missing, invalid or expired credentials (HTTP 401/403).
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Input rejected before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Non-2xx response carrying a server-provided message.
    #[error("Request failed ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Local persisted state (token storage) failed.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskTimeError {
    /// Text shown to the user next to the control that triggered the call.
    ///
    /// Server-provided details are surfaced verbatim; decode failures collapse
    /// to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(message)
            | Self::Validation(message)
            | Self::Network(message)
            | Self::Config(message)
            | Self::Storage(message)
            | Self::Internal(message) => message.clone(),
            Self::Remote { message, .. } => message.clone(),
            Self::Parse(_) => GENERIC_REQUEST_FAILURE.to_string(),
        }
    }

    /// Whether this failure should drop the current session.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

/// Result type alias for tasktime operations
pub type Result<T> = std::result::Result<T, TaskTimeError>;
