//! Search module.
//!
//! Filter state, request parameters, result normalization, suggestions and
//! block pagination.

mod filter;
mod pagination;
mod query;
mod results;
mod suggestion;

pub use filter::{FacetChange, FilterPatch, FilterState, PriceBracket, PriceSort};
pub use pagination::{NavButton, PageBlock, DEFAULT_BLOCK_SIZE};
pub use query::{RandomParams, SearchParams, SearchPlan, DEFAULT_PAGE_SIZE, RANDOM_SAMPLE_SIZE};
pub use results::{Pagination, ProductPage, SearchMetadata, SearchPayload};
pub use suggestion::{Suggestion, SuggestionKind, SuggestionList};
