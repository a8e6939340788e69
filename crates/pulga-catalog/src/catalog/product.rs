//! Product listing types as returned by the search API.

use crate::ids::{ProductId, PublicationId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Name shown when a product has neither a title nor a name.
pub const UNNAMED_PRODUCT: &str = "Unnamed product";

/// Condition of the item being sold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    /// Brand new (`NUEVO`).
    New,
    /// Second hand (`USADO`).
    Used,
    /// Refurbished (`REACONDICIONADO`).
    Refurbished,
    /// Anything else the API sends, kept verbatim.
    Other(String),
}

impl Condition {
    /// Wire value sent to and received from the API.
    pub fn as_str(&self) -> &str {
        match self {
            Condition::New => "NUEVO",
            Condition::Used => "USADO",
            Condition::Refurbished => "REACONDICIONADO",
            Condition::Other(s) => s,
        }
    }

    /// Case-insensitive parse; unknown values become [`Condition::Other`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "NUEVO" => Condition::New,
            "USADO" => Condition::Used,
            "REACONDICIONADO" => Condition::Refurbished,
            _ => Condition::Other(s.to_string()),
        }
    }

    /// Short badge label.
    pub fn label(&self) -> String {
        match self {
            Condition::New => "✓ New".to_string(),
            Condition::Used => "↻ Used".to_string(),
            Condition::Refurbished => "⚙ Refurbished".to_string(),
            Condition::Other(s) => s.clone(),
        }
    }

    /// The three conditions offered as filter options.
    pub fn options() -> [Condition; 3] {
        [Condition::New, Condition::Used, Condition::Refurbished]
    }
}

impl From<String> for Condition {
    fn from(s: String) -> Self {
        Condition::parse(&s)
    }
}

impl From<Condition> for String {
    fn from(c: Condition) -> Self {
        c.as_str().to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An image attached to a publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMedia {
    pub url: String,
    #[serde(rename = "orden", default)]
    pub position: i32,
}

/// A product listing.
///
/// Field names follow the search API. Listings are immutable once fetched and
/// are replaced wholesale by the next query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Publication id on the external detail site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PublicationId>,
    /// Catalog product id.
    #[serde(rename = "id_producto")]
    pub product_id: ProductId,
    /// Publication title.
    #[serde(rename = "titulo", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Product name, used when the title is missing.
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Raw price as sent by the API (see [`Money::from_wire_price`]).
    #[serde(rename = "precio", deserialize_with = "deserialize_price")]
    pub price: i64,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "condicion")]
    pub condition: Condition,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "marca", default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(rename = "fecha_creacion", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "multimedia", default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<ProductMedia>,
}

impl Product {
    /// Display name: title, then name, then a fixed placeholder.
    ///
    /// Empty strings count as missing.
    pub fn display_name(&self) -> &str {
        non_empty(&self.title)
            .or_else(|| non_empty(&self.name))
            .unwrap_or(UNNAMED_PRODUCT)
    }

    /// Price interpreted in the storefront currency.
    pub fn money(&self) -> Money {
        Money::from_wire_price(self.price, Currency::COP)
    }

    /// Formatted price for display.
    pub fn price_display(&self) -> String {
        self.money().display()
    }

    /// Main image: the explicit image, or the first media item by position.
    pub fn image_url(&self) -> Option<&str> {
        non_empty(&self.image).or_else(|| {
            self.media
                .iter()
                .min_by_key(|m| m.position)
                .map(|m| m.url.as_str())
        })
    }

    /// Whether stock information says the item can be bought.
    pub fn in_stock(&self) -> Option<bool> {
        self.stock.map(|s| s > 0)
    }

    /// Stock badge text, if stock is known.
    pub fn stock_label(&self) -> Option<String> {
        self.stock.map(|s| match s {
            s if s <= 0 => "Out of stock".to_string(),
            1 => "1 available".to_string(),
            s => format!("{} available", s),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Accept integer or floating point prices; floats are rounded.
fn deserialize_price<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    // `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
    number
        .as_f64()
        .map(f64::round)
        .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
        .ok_or_else(|| serde::de::Error::custom(format!("price out of range: {}", number)))
}

#[cfg(test)]
mod fixtures {
    use super::*;

    /// Minimal product used across catalog tests.
    pub fn product(id: &str, title: Option<&str>, name: Option<&str>) -> Product {
        Product {
            id: Some(PublicationId::new(format!("pub-{}", id))),
            product_id: ProductId::new(id),
            title: title.map(str::to_string),
            name: name.map(str::to_string),
            price: 15000,
            category: "HOGAR".to_string(),
            condition: Condition::New,
            description: None,
            brand: None,
            stock: None,
            created_at: None,
            image: None,
            media: Vec::new(),
        }
    }
}
