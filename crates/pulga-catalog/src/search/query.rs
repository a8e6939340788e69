//! Translate filter state into search API parameters.

use crate::catalog::CategoryChoice;
use crate::error::CatalogError;
use crate::search::FilterState;
use serde::Serialize;

/// Page size used by the product grid.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Number of products returned by a "surprise me" request.
pub const RANDOM_SAMPLE_SIZE: u32 = 20;

/// Query parameters of the paged search endpoint.
///
/// Empty fields are skipped entirely rather than sent as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "busqueda", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "precio", skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "condicion", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "ordenar", skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl SearchParams {
    /// Unfiltered listing of one page.
    pub fn unfiltered(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            ..Default::default()
        }
    }

    /// Encode as a URL query string.
    pub fn to_query_string(&self) -> Result<String, CatalogError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

/// Query parameters of the random sample endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RandomParams {
    pub limit: u32,
}

/// What request a filter state turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    /// Paged search with the given parameters.
    Paged(SearchParams),
    /// Random sample; pagination does not apply.
    RandomSample(RandomParams),
}

impl SearchPlan {
    /// Build the request for `filters` at `page`.
    pub fn from_filters(filters: &FilterState, page: u32, page_size: u32) -> Self {
        let category = filters
            .category
            .as_deref()
            .map(|c| CategoryChoice::from_name(c.trim()));

        if category == Some(CategoryChoice::SurpriseMe) {
            return SearchPlan::RandomSample(RandomParams {
                limit: RANDOM_SAMPLE_SIZE,
            });
        }

        let mut params = SearchParams::unfiltered(page, page_size);
        params.text = filters.search_text().map(str::to_string);
        params.price = filters.price.map(|p| p.to_wire());
        params.category = category.and_then(CategoryChoice::into_facet);
        params.condition = filters
            .condition
            .as_ref()
            .map(|c| c.as_str().to_string())
            .filter(|c| !c.trim().is_empty());
        params.sort = filters.sort.map(|s| s.as_str().to_string());

        SearchPlan::Paged(params)
    }

    /// Whether this plan returns a single unpaged sample.
    pub fn is_random(&self) -> bool {
        matches!(self, SearchPlan::RandomSample(_))
    }
}
