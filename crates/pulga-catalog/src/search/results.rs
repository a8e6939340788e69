//! Search results and response normalization.

use crate::catalog::Product;
use crate::search::query::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Pagination info of a result page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Total number of matching items.
    pub total: u64,
    /// Total number of pages (at least 1).
    pub total_pages: u32,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: u32, page_size: u32, total: u64, total_pages: u32) -> Self {
        Self {
            page: page.max(1),
            page_size,
            total,
            total_pages: total_pages.max(1),
        }
    }

    /// Single page holding `count` items.
    pub fn single(count: usize, page_size: u32) -> Self {
        Self::new(1, page_size, count as u64, 1)
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Whether `page` is a valid navigation target.
    pub fn contains(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, 0, 1)
    }
}

/// One authoritative page of products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub pagination: Pagination,
}

impl ProductPage {
    /// Create a result page.
    pub fn new(items: Vec<Product>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Heading such as "3 products found".
    pub fn summary(&self) -> String {
        match self.items.len() {
            1 => "1 product found".to_string(),
            n => format!("{} products found", n),
        }
    }
}

/// Pagination counts sent by the search endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMetadata {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(rename = "totalPages", default)]
    pub total_pages: Option<u32>,
}

/// Raw search response: either a bare product list or an envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchPayload {
    BareList(Vec<Product>),
    Envelope {
        #[serde(rename = "productos")]
        items: Vec<Product>,
        #[serde(default)]
        metadata: Option<SearchMetadata>,
        #[serde(rename = "sessionId", default, skip_serializing_if = "Option::is_none")]
        session_id: Option<String>,
    },
}

impl SearchPayload {
    /// Normalize into a [`ProductPage`] for the requested page.
    ///
    /// Zero or missing counts fall back to one page and the item count.
    pub fn into_page(self, page: u32, page_size: u32) -> ProductPage {
        match self {
            SearchPayload::BareList(items) => {
                let pagination = Pagination::single(items.len(), page_size);
                ProductPage::new(items, pagination)
            }
            SearchPayload::Envelope {
                items, metadata, ..
            } => {
                let metadata = metadata.unwrap_or_default();
                let total = metadata
                    .total
                    .filter(|t| *t > 0)
                    .unwrap_or(items.len() as u64);
                let total_pages = metadata.total_pages.filter(|p| *p > 0).unwrap_or(1);
                let page = page.clamp(1, total_pages);
                ProductPage::new(items, Pagination::new(page, page_size, total, total_pages))
            }
        }
    }

    /// Normalize as an unpaged sample.
    pub fn into_sample(self, page_size: u32) -> ProductPage {
        let items = match self {
            SearchPayload::BareList(items) => items,
            SearchPayload::Envelope { items, .. } => items,
        };
        let pagination = Pagination::single(items.len(), page_size);
        ProductPage::new(items, pagination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT: &str =
        r#"{"id_producto": "p1", "precio": 100, "categoria": "ROPA", "condicion": "NUEVO"}"#;

    #[test]
    fn test_bare_list_is_single_page() {
        let json = format!("[{0}, {0}]", PRODUCT);
        let payload: SearchPayload = serde_json::from_str(&json).unwrap();
        let page = payload.into_page(3, 20);

        assert_eq!(page.len(), 2);
        assert_eq!(page.pagination, Pagination::new(1, 20, 2, 1));
    }

    #[test]
    fn test_envelope_with_metadata() {
        let json = format!(
            r#"{{"productos": [{}],
                "metadata": {{"total": 47, "totalPages": 3}}, "sessionId": "s-1"}}"#,
            PRODUCT
        );
        let payload: SearchPayload = serde_json::from_str(&json).unwrap();
        let page = payload.into_page(2, 20);

        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.total, 47);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn test_envelope_zero_counts_fall_back() {
        let json = format!(
            r#"{{"productos": [{}], "metadata": {{"total": 0, "totalPages": 0}}}}"#,
            PRODUCT
        );
        let payload: SearchPayload = serde_json::from_str(&json).unwrap();
        let page = payload.into_page(1, 20);

        assert_eq!(page.pagination.total, 1);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_envelope_without_metadata() {
        let json = format!(r#"{{"productos": [{}]}}"#, PRODUCT);
        let payload: SearchPayload = serde_json::from_str(&json).unwrap();
        let page = payload.into_page(5, 20);
        assert_eq!(page.pagination, Pagination::new(1, 20, 1, 1));
    }

    #[test]
    fn test_sample_ignores_metadata() {
        let json = format!(
            r#"{{"productos": [{}], "metadata": {{"total": 900, "totalPages": 45}}}}"#,
            PRODUCT
        );
        let payload: SearchPayload = serde_json::from_str(&json).unwrap();
        let page = payload.into_sample(20);
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.total, 1);
    }

    #[test]
    fn test_summary() {
        let payload: SearchPayload = serde_json::from_str(&format!("[{}]", PRODUCT)).unwrap();
        assert_eq!(payload.into_page(1, 20).summary(), "1 product found");
        assert_eq!(ProductPage::default().summary(), "0 products found");
    }

    #[test]
    fn test_pagination_bounds() {
        let p = Pagination::new(2, 20, 47, 3);
        assert!(p.contains(1));
        assert!(p.contains(3));
        assert!(!p.contains(0));
        assert!(!p.contains(4));
        assert!(!p.is_first());
        assert!(!p.is_last());
    }
}
