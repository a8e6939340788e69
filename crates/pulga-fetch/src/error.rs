//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Failed to send the request (connection, DNS, TLS...).
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL or query.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-2xx HTTP response. `message` holds the response body.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl FetchError {
    /// HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-supplied error message from a `{"error": "..."}` body.
    pub fn server_message(&self) -> Option<String> {
        match self {
            FetchError::HttpError { message, .. } => {
                serde_json::from_str::<serde_json::Value>(message)
                    .ok()
                    .and_then(|v| v.get("error")?.as_str().map(str::to_string))
                    .filter(|m| !m.trim().is_empty())
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for FetchError {
    fn from(e: serde_urlencoded::ser::Error) -> Self {
        FetchError::InvalidUrl(e.to_string())
    }
}
