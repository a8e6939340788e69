//! Search filter state.

use crate::catalog::{CategoryChoice, Condition};
use crate::error::CatalogError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// A price bracket facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriceBracket {
    /// Up to and including the amount (`"hasta N"`).
    UpTo(u64),
    /// Between two amounts (`"entre A - B"`).
    Between(u64, u64),
    /// Above the amount (`"mas de N"`).
    Over(u64),
}

impl PriceBracket {
    /// The brackets offered by the storefront, in display order.
    pub fn presets() -> [PriceBracket; 8] {
        [
            PriceBracket::UpTo(5_000),
            PriceBracket::Between(5_000, 10_000),
            PriceBracket::Between(10_000, 25_000),
            PriceBracket::Between(25_000, 50_000),
            PriceBracket::Between(50_000, 100_000),
            PriceBracket::Between(100_000, 300_000),
            PriceBracket::Between(300_000, 500_000),
            PriceBracket::Over(500_000),
        ]
    }

    /// Wire value understood by the search API.
    pub fn to_wire(&self) -> String {
        match self {
            PriceBracket::UpTo(n) => format!("hasta {}", n),
            PriceBracket::Between(a, b) => format!("entre {} - {}", a, b),
            PriceBracket::Over(n) => format!("mas de {}", n),
        }
    }

    /// Human label, e.g. "$5.000 - $10.000".
    pub fn label(&self) -> String {
        let amount = |n: &u64| {
            let major = i64::try_from(*n).unwrap_or(i64::MAX);
            Money::from_major(major, Currency::COP).display()
        };
        match self {
            PriceBracket::UpTo(n) => format!("Up to {}", amount(n)),
            PriceBracket::Between(a, b) => format!("{} - {}", amount(a), amount(b)),
            PriceBracket::Over(n) => format!("Over {}", amount(n)),
        }
    }
}

impl FromStr for PriceBracket {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogError::InvalidPriceBracket(s.to_string());
        let number = |v: &str| v.trim().parse::<u64>().map_err(|_| invalid());
        let lower = s.trim().to_lowercase();

        if let Some(rest) = lower.strip_prefix("hasta ") {
            return Ok(PriceBracket::UpTo(number(rest)?));
        }
        if let Some(rest) = lower.strip_prefix("entre ") {
            let (a, b) = rest.split_once('-').ok_or_else(invalid)?;
            let (a, b) = (number(a)?, number(b)?);
            if a > b {
                return Err(invalid());
            }
            return Ok(PriceBracket::Between(a, b));
        }
        if let Some(rest) = lower
            .strip_prefix("mas de ")
            .or_else(|| lower.strip_prefix("más de "))
        {
            return Ok(PriceBracket::Over(number(rest)?));
        }
        Err(invalid())
    }
}

impl TryFrom<String> for PriceBracket {
    type Error = CatalogError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PriceBracket> for String {
    fn from(b: PriceBracket) -> Self {
        b.to_wire()
    }
}

impl fmt::Display for PriceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

/// Price sort order facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriceSort {
    /// Cheapest first (`precio-asc`).
    Ascending,
    /// Most expensive first (`precio-desc`).
    Descending,
}

impl PriceSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSort::Ascending => "precio-asc",
            PriceSort::Descending => "precio-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PriceSort::Ascending => "Price: Low to High",
            PriceSort::Descending => "Price: High to Low",
        }
    }
}

impl FromStr for PriceSort {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "precio-asc" | "asc" => Ok(PriceSort::Ascending),
            "precio-desc" | "desc" => Ok(PriceSort::Descending),
            _ => Err(CatalogError::InvalidSortOrder(s.to_string())),
        }
    }
}

impl TryFrom<String> for PriceSort {
    type Error = CatalogError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PriceSort> for String {
    fn from(s: PriceSort) -> Self {
        s.as_str().to_string()
    }
}

/// Partial filter snapshot attached to a history suggestion.
///
/// Field names follow the API. Every field is optional; an empty string
/// clears the facet when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "precio", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "condicion", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "ordenPrecio", default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

/// A single facet change coming from the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetChange {
    Price(Option<PriceBracket>),
    Category(Option<String>),
    Condition(Option<Condition>),
    Sort(Option<PriceSort>),
}

/// Current search text and facet selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free text; only sent when non-blank.
    pub search: String,
    pub price: Option<PriceBracket>,
    /// Category facet; may hold the surprise-me marker.
    pub category: Option<String>,
    pub condition: Option<Condition>,
    pub sort: Option<PriceSort>,
}

impl FilterState {
    /// Create an empty filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Apply a facet change.
    pub fn with_facet(mut self, change: FacetChange) -> Self {
        self.set_facet(change);
        self
    }

    /// Trimmed search text, if any.
    pub fn search_text(&self) -> Option<&str> {
        let text = self.search.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Whether any non-text facet is selected.
    pub fn has_facets(&self) -> bool {
        self.price.is_some()
            || self.category.is_some()
            || self.condition.is_some()
            || self.sort.is_some()
    }

    /// Whether nothing at all is selected.
    pub fn is_empty(&self) -> bool {
        self.search_text().is_none() && !self.has_facets()
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Apply a facet change. Returns whether the state changed.
    pub fn set_facet(&mut self, change: FacetChange) -> bool {
        let before = self.clone();
        match change {
            FacetChange::Price(p) => self.price = p,
            FacetChange::Category(c) => {
                self.category = c.and_then(|name| CategoryChoice::from_name(&name).into_facet())
            }
            FacetChange::Condition(c) => self.condition = c,
            FacetChange::Sort(s) => self.sort = s,
        }
        *self != before
    }

    /// Merge a history snapshot into this state.
    ///
    /// Values that cannot be parsed are skipped and the current value kept.
    pub fn apply(&mut self, patch: &FilterPatch) {
        if let Some(search) = &patch.search {
            self.search = search.clone();
        }
        if let Some(price) = &patch.price {
            match parse_optional::<PriceBracket>(price) {
                Ok(value) => self.price = value,
                Err(e) => warn!(error = %e, "Ignoring price from history snapshot"),
            }
        }
        if let Some(category) = &patch.category {
            self.category = CategoryChoice::from_name(category.trim()).into_facet();
        }
        if let Some(condition) = &patch.condition {
            let condition = condition.trim();
            self.condition = (!condition.is_empty()).then(|| Condition::parse(condition));
        }
        if let Some(sort) = &patch.sort {
            match parse_optional::<PriceSort>(sort) {
                Ok(value) => self.sort = value,
                Err(e) => warn!(error = %e, "Ignoring sort order from history snapshot"),
            }
        }
    }
}

fn parse_optional<T: FromStr>(value: &str) -> Result<Option<T>, T::Err> {
    let value = value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}
