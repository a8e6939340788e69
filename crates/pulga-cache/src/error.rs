//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using a store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to read or write the backing file.
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a valid JSON object of strings.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Another thread panicked while holding the store lock.
    #[error("Store lock poisoned: {0}")]
    Poisoned(String),
}
