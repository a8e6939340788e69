//! Catalog error types.

use thiserror::Error;

/// Errors raised while interpreting storefront values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Price bracket string not understood.
    #[error("Invalid price bracket: {0}")]
    InvalidPriceBracket(String),

    /// Sort order string not understood.
    #[error("Invalid sort order: {0}")]
    InvalidSortOrder(String),

    /// Query string could not be encoded.
    #[error("Failed to encode query: {0}")]
    QueryEncoding(String),
}

impl From<serde_urlencoded::ser::Error> for CatalogError {
    fn from(e: serde_urlencoded::ser::Error) -> Self {
        CatalogError::QueryEncoding(e.to_string())
    }
}
