//! API boundary errors.

use pulga_fetch::FetchError;
use thiserror::Error;

/// Failures of a single storefront API call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never got an answer.
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx response. `message` is the server's `{"error": ...}` text.
    #[error("Server returned {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// The response did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// One user-facing line: the server's message when it sent one,
    /// `fallback` otherwise.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        match &e {
            FetchError::HttpError { status, .. } => ApiError::Status {
                status: *status,
                message: e.server_message(),
            },
            FetchError::ParseError(msg) | FetchError::JsonError(msg) => {
                ApiError::Decode(msg.clone())
            }
            FetchError::RequestError(msg) | FetchError::InvalidUrl(msg) => {
                ApiError::Transport(msg.clone())
            }
        }
    }
}
