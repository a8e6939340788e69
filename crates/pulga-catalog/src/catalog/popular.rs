//! Click-ranked popular products.

use crate::catalog::Product;
use crate::ids::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the click ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularProduct {
    #[serde(rename = "id_producto")]
    pub product_id: ProductId,
    #[serde(rename = "clickCount", default)]
    pub click_count: u64,
    #[serde(rename = "lastClick", default)]
    pub last_click: Option<String>,
    #[serde(rename = "nombre", default)]
    pub name: String,
    /// Full listing; `None` when the product no longer exists.
    #[serde(rename = "producto", default)]
    pub product: Option<Product>,
}

impl PopularProduct {
    /// Parse the last click time, if it is a valid RFC 3339 timestamp.
    pub fn last_click_at(&self) -> Option<DateTime<Utc>> {
        self.last_click
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Badge text such as "3 clicks".
    pub fn clicks_label(&self) -> String {
        if self.click_count == 1 {
            "1 click".to_string()
        } else {
            format!("{} clicks", self.click_count)
        }
    }
}

/// Response envelope of the top-products endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopularProducts {
    #[serde(rename = "productos", default)]
    pub items: Vec<PopularProduct>,
}

impl PopularProducts {
    /// Entries that still carry a full product listing.
    pub fn into_complete(self) -> Vec<PopularProduct> {
        self.items
            .into_iter()
            .filter(|item| item.product.is_some())
            .collect()
    }
}
