//! Storefront view state: category browsing, filtered listing and the
//! user events that move between them.
//!
//! [`StorefrontView`] owns all view state and talks to the API. A host (a UI
//! or the CLI) feeds it [`ViewEvent`]s and renders what the accessors
//! return; the host side effects (navigation, scrolling) go through the
//! [`Navigator`] it was built with.

use crate::api::StorefrontApi;
use crate::error::ApiError;
use pulga_catalog::prelude::*;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const SEARCH_FAILED: &str = "Failed to run the search";
pub const LOAD_FAILED: &str = "Failed to load products";
pub const HISTORY_DELETE_FAILED: &str = "Failed to delete the history entry";
pub const HISTORY_CLEAR_FAILED: &str = "Failed to clear the history";

/// Host side effects requested by the view.
pub trait Navigator: Send + Sync {
    /// Leave the storefront for an external page.
    fn navigate(&self, url: &str);

    fn scroll_to_top(&self) {}
}

/// Which top-level screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    CategoryBrowse,
    FilteredList,
}

/// Every user interaction the view reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    SelectCategory(String),
    SetFacet(FacetChange),
    SetSearchText(String),
    FocusSearch,
    SubmitSearch,
    SelectSuggestion(Suggestion),
    GoToPage(u32),
    ClearFilters,
    ResetToCategories,
    DeleteHistoryItem(HistoryId),
    ClearAllHistory,
    LoadBrowse,
    ActivateProduct(Product),
}

/// Identifies one issued search. Only the newest ticket may apply results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

pub struct StorefrontView {
    api: StorefrontApi,
    navigator: Arc<dyn Navigator>,
    mode: ViewMode,
    filters: FilterState,
    results: ProductPage,
    suggestions: SuggestionList,
    categories: Vec<Category>,
    popular: Vec<PopularProduct>,
    loading: bool,
    error: Option<String>,
    last_ticket: u64,
}

impl std::fmt::Debug for StorefrontView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontView")
            .field("mode", &self.mode)
            .field("filters", &self.filters)
            .field("results", &self.results.len())
            .field("suggestions", &self.suggestions.len())
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl StorefrontView {
    pub fn new(api: StorefrontApi, navigator: Arc<dyn Navigator>) -> Self {
        let page_size = api.config().page_size;
        Self {
            api,
            navigator,
            mode: ViewMode::CategoryBrowse,
            filters: FilterState::new(),
            results: ProductPage::new(Vec::new(), Pagination::new(1, page_size, 0, 1)),
            suggestions: SuggestionList::default(),
            categories: Vec::new(),
            popular: Vec::new(),
            loading: false,
            error: None,
            last_ticket: 0,
        }
    }

    /// Start on the filtered list instead of the category grid.
    pub fn showing_search(mut self) -> Self {
        self.mode = ViewMode::FilteredList;
        self
    }

    /// Start from an existing filter selection.
    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn results(&self) -> &ProductPage {
        &self.results
    }

    pub fn suggestions(&self) -> &SuggestionList {
        &self.suggestions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn popular(&self) -> &[PopularProduct] {
        &self.popular
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn api(&self) -> &StorefrontApi {
        &self.api
    }

    /// Page buttons for the current results.
    pub fn page_block(&self) -> PageBlock {
        let pagination = &self.results.pagination;
        PageBlock::with_default_size(pagination.page, pagination.total_pages)
    }

    /// Route a user event to its operation.
    pub async fn dispatch(&mut self, event: ViewEvent) {
        debug!(?event, "dispatching view event");
        match event {
            ViewEvent::SelectCategory(name) => self.select_category(&name).await,
            ViewEvent::SetFacet(change) => self.set_facet(change).await,
            ViewEvent::SetSearchText(text) => self.set_search_text(text).await,
            ViewEvent::FocusSearch => self.focus_search().await,
            ViewEvent::SubmitSearch => self.submit_search().await,
            ViewEvent::SelectSuggestion(suggestion) => self.select_suggestion(&suggestion).await,
            ViewEvent::GoToPage(page) => {
                self.go_to_page(page).await;
            }
            ViewEvent::ClearFilters => self.clear_filters().await,
            ViewEvent::ResetToCategories => self.reset_to_categories().await,
            ViewEvent::DeleteHistoryItem(id) => {
                self.delete_history_item(&id).await;
            }
            ViewEvent::ClearAllHistory => {
                self.clear_all_history().await;
            }
            ViewEvent::LoadBrowse => self.load_browse().await,
            ViewEvent::ActivateProduct(product) => {
                self.activate_product(&product).await;
            }
        }
    }

    /// Open a category from the browse grid.
    pub async fn select_category(&mut self, name: &str) {
        self.filters
            .set_facet(FacetChange::Category(Some(name.to_string())));
        self.mode = ViewMode::FilteredList;
        self.search_page(1, SEARCH_FAILED).await;
    }

    /// Change a non-text facet. Only searches while the filtered list is
    /// shown and the value actually changed.
    pub async fn set_facet(&mut self, change: FacetChange) {
        let changed = self.filters.set_facet(change);
        if changed && self.mode == ViewMode::FilteredList {
            self.search_page(1, SEARCH_FAILED).await;
        }
    }

    /// Typing in the search box. Refreshes suggestions, never searches.
    pub async fn set_search_text(&mut self, text: impl Into<String>) {
        self.filters.search = text.into();
        if self.filters.search.trim().is_empty() {
            self.suggestions.clear();
        } else {
            let items = self.api.fetch_suggestions(&self.filters.search).await;
            self.suggestions.replace(items);
        }
    }

    /// Focusing the empty dropdown surfaces the search history.
    pub async fn focus_search(&mut self) {
        if self.suggestions.is_empty() {
            let items = self.api.fetch_suggestions(&self.filters.search).await;
            self.suggestions.replace(items);
        }
    }

    pub async fn submit_search(&mut self) {
        self.search_page(1, SEARCH_FAILED).await;
    }

    /// Pick a suggestion. History entries bring back their facets.
    pub async fn select_suggestion(&mut self, suggestion: &Suggestion) {
        if let Some(patch) = suggestion.history_filters() {
            self.filters.apply(patch);
        }
        self.filters.search = suggestion.text.clone();
        self.suggestions.clear();
        self.search_page(1, SEARCH_FAILED).await;
    }

    /// Jump to `page`. Returns false and does nothing when out of range.
    pub async fn go_to_page(&mut self, page: u32) -> bool {
        if !self.results.pagination.contains(page) {
            debug!(page, total_pages = self.results.pagination.total_pages, "ignoring page change");
            return false;
        }
        self.search_page(page, SEARCH_FAILED).await;
        self.navigator.scroll_to_top();
        true
    }

    /// Load `page` for the current filters without range checks, as on
    /// first display.
    pub async fn load_page(&mut self, page: u32) {
        self.search_page(page.max(1), LOAD_FAILED).await;
    }

    /// Drop every filter and reload the unfiltered first page.
    pub async fn clear_filters(&mut self) {
        self.filters.clear();
        self.suggestions.clear();
        self.search_page(1, LOAD_FAILED).await;
    }

    /// Back to the category grid with all filters reset.
    pub async fn reset_to_categories(&mut self) {
        self.mode = ViewMode::CategoryBrowse;
        self.clear_filters().await;
    }

    /// Delete one history entry. The list is only touched on success.
    pub async fn delete_history_item(&mut self, id: &HistoryId) -> bool {
        match self.api.delete_history_item(id).await {
            Ok(()) => {
                self.suggestions.remove_id(id);
                true
            }
            Err(e) => {
                warn!(%id, error = %e, "failed to delete history entry");
                self.error = Some(HISTORY_DELETE_FAILED.to_string());
                false
            }
        }
    }

    /// Delete the whole history, keeping text matches in the list.
    pub async fn clear_all_history(&mut self) -> bool {
        match self.api.clear_history().await {
            Ok(()) => {
                self.suggestions.clear_history();
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to clear history");
                self.error = Some(HISTORY_CLEAR_FAILED.to_string());
                false
            }
        }
    }

    /// Load the category grid alone. Popular products are not requested.
    pub async fn load_categories(&mut self) {
        self.categories = self.api.fetch_categories().await;
    }

    /// Load the category grid and the popular products together.
    pub async fn load_browse(&mut self) {
        let limit = self.api.config().popular_limit;
        let (categories, popular) = futures::join!(
            self.api.fetch_categories(),
            self.api.fetch_popular(limit)
        );
        self.categories = categories;
        self.popular = popular.unwrap_or_else(|e| {
            warn!(error = %e, "failed to load popular products");
            Vec::new()
        });
    }

    /// Record the click, then hand off to the external detail page.
    ///
    /// Navigation happens whatever the click outcome. Returns the URL.
    pub async fn activate_product(&mut self, product: &Product) -> String {
        self.api
            .record_click(&product.product_id, product.display_name())
            .await;
        let url = self.api.detail_url(product);
        info!(%url, "navigating to product detail");
        self.navigator.navigate(&url);
        url
    }

    /// Start a search. Pair with [`StorefrontView::complete_search`] when
    /// the fetch runs outside the view.
    pub fn prepare_search(&mut self) -> SearchTicket {
        self.last_ticket += 1;
        self.loading = true;
        self.error = None;
        self.suggestions.clear();
        SearchTicket(self.last_ticket)
    }

    /// Apply a finished search. Results of any ticket but the newest are
    /// dropped. Returns whether the result was applied.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<ProductPage, ApiError>,
        fallback: &str,
    ) -> bool {
        if ticket.0 != self.last_ticket {
            debug!(?ticket, latest = self.last_ticket, "discarding stale search result");
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                debug!(items = page.len(), page = page.pagination.page, "search results applied");
                self.results = page;
            }
            Err(e) => {
                warn!(error = %e, "search failed");
                self.error = Some(e.user_message(fallback));
            }
        }
        true
    }

    async fn search_page(&mut self, page: u32, fallback: &str) {
        let ticket = self.prepare_search();
        let page_size = self.api.config().page_size;
        let result = self.api.search(&self.filters, page, page_size).await;
        self.complete_search(ticket, result, fallback);
    }
}
