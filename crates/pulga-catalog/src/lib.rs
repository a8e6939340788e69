//! Storefront domain types for Pulga.
//!
//! This crate holds everything the storefront client knows about the search
//! API's data, with no I/O:
//!
//! - **Catalog**: products, conditions, categories, popular products
//! - **Money**: price unit heuristic and peso formatting
//! - **Search**: filter state, request parameters, result pages,
//!   suggestions and block pagination
//!
//! # Example
//!
//! ```rust
//! use pulga_catalog::prelude::*;
//!
//! let filters = FilterState::new()
//!     .with_search("lamp")
//!     .with_facet(FacetChange::Sort(Some(PriceSort::Ascending)));
//!
//! match SearchPlan::from_filters(&filters, 1, DEFAULT_PAGE_SIZE) {
//!     SearchPlan::Paged(params) => {
//!         assert_eq!(
//!             params.to_query_string().unwrap(),
//!             "page=1&pageSize=20&busqueda=lamp&ordenar=precio-asc"
//!         );
//!     }
//!     SearchPlan::RandomSample(_) => unreachable!(),
//! }
//!
//! let block = PageBlock::with_default_size(23, 47);
//! assert_eq!(block.pages(), 21..=30);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::*;
pub use money::{format_price, Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::{format_price, Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Category, CategoryChoice, Condition, PopularProduct, PopularProducts, Product,
        ProductMedia, EVERYTHING, SURPRISE_ME,
    };

    // Search
    pub use crate::search::{
        FacetChange, FilterPatch, FilterState, NavButton, PageBlock, Pagination, PriceBracket,
        PriceSort, ProductPage, SearchParams, SearchPayload, SearchPlan, Suggestion,
        SuggestionKind, SuggestionList, DEFAULT_BLOCK_SIZE, DEFAULT_PAGE_SIZE,
        RANDOM_SAMPLE_SIZE,
    };
}
