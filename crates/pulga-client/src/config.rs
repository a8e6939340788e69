//! Client configuration and endpoint paths.

use pulga_catalog::search::{DEFAULT_PAGE_SIZE, RANDOM_SAMPLE_SIZE};
use pulga_catalog::HistoryId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:5610";
pub const DEFAULT_DETAIL_URL: &str = "http://localhost:4040";
pub const DEFAULT_POPULAR_LIMIT: u32 = 6;

/// Where the storefront API and the external detail site live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the search/analytics API.
    pub api_url: String,
    /// Base URL of the externally owned publication detail site.
    pub detail_url: String,
    pub page_size: u32,
    pub random_sample_size: u32,
    pub popular_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            detail_url: DEFAULT_DETAIL_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            random_sample_size: RANDOM_SAMPLE_SIZE,
            popular_limit: DEFAULT_POPULAR_LIMIT,
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    pub fn with_detail_url(mut self, detail_url: impl Into<String>) -> Self {
        self.detail_url = detail_url.into();
        self
    }

    /// API base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Absolute detail page URL for a publication id.
    pub fn detail_page(&self, publication: &str) -> String {
        format!(
            "{}/publicaciones/{}",
            self.detail_url.trim_end_matches('/'),
            publication
        )
    }
}

/// API paths, relative to [`ClientConfig::api_url`].
pub struct Endpoints;

impl Endpoints {
    pub const SEARCH: &'static str = "/api/search/products";
    pub const RANDOM_PRODUCTS: &'static str = "/api/search/products/random";
    pub const SUGGESTIONS: &'static str = "/api/search/suggestions";
    pub const HISTORY: &'static str = "/api/search/history";
    pub const CLICK: &'static str = "/api/search/click";
    pub const CATEGORIES: &'static str = "/api/categories";
    pub const TOP_PRODUCTS: &'static str = "/api/analytics/top-products";

    pub fn history_item(id: &HistoryId) -> String {
        format!("{}/{}", Self::HISTORY, id)
    }
}
