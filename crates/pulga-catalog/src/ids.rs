//! Newtype IDs for server-issued identifiers.
//!
//! A product carries two identifiers: the catalog product id (used for click
//! tracking) and the publication id (used by the external detail site).
//! Keeping them as distinct types stops one from being passed for the other.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a transparent string id with display and conversions.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

define_id!(
    /// Catalog product identifier (`id_producto` on the wire).
    ProductId
);
define_id!(
    /// Publication identifier owned by the external detail site.
    PublicationId
);
define_id!(
    /// Identifier of a search-history entry.
    HistoryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: PublicationId = "pub-456".into();
        assert_eq!(id.as_str(), "pub-456");
    }

    #[test]
    fn test_id_display() {
        let id = HistoryId::new("h-789");
        assert_eq!(format!("{}", id), "h-789");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("p-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p-1\"");
        let back: ProductId = serde_json::from_str("\"p-1\"").unwrap();
        assert_eq!(back, id);
    }
}
