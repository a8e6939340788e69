//! Buffered API responses.

use crate::FetchError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// A response whose body has been read in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Canned JSON reply, mostly for [`MockTransport`](crate::mock::MockTransport).
    pub fn json_body(status: u16, value: &Value) -> Self {
        Self::new(status, HashMap::new(), value.to_string().into_bytes())
            .with_header("Content-Type", "application/json")
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8.
    pub fn text(&self) -> Result<String, FetchError> {
        std::str::from_utf8(&self.body)
            .map(str::to_owned)
            .map_err(|e| FetchError::ParseError(format!("Body is not UTF-8: {}", e)))
    }

    /// Deserialize the body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Untyped view of the body. Empty or non-JSON bodies give `None`.
    pub fn json_value(&self) -> Option<Value> {
        (!self.body.is_empty())
            .then(|| serde_json::from_slice(&self.body).ok())
            .flatten()
    }

    /// Header lookup ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find_map(|(k, v)| k.eq_ignore_ascii_case(name).then_some(v.as_str()))
    }

    /// Turn a non-2xx reply into [`FetchError::HttpError`], keeping the body
    /// so callers can surface the server's own message.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(FetchError::HttpError {
            status: self.status,
            message: String::from_utf8_lossy(&self.body).into_owned(),
        })
    }
}
