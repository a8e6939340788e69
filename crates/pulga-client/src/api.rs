//! Typed calls against the storefront search/analytics API.

use crate::config::{ClientConfig, Endpoints};
use crate::error::ApiError;
use crate::session::SessionPropagator;
use pulga_cache::SessionStore;
use pulga_catalog::prelude::*;
use pulga_catalog::search::RandomParams;
use pulga_fetch::{FetchClient, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

const NO_QUERY: [(&str, &str); 0] = [];

#[derive(Serialize)]
struct ClickEvent<'a> {
    #[serde(rename = "id_producto")]
    product_id: &'a ProductId,
    #[serde(rename = "nombre")]
    name: &'a str,
}

/// Storefront API client.
///
/// Every request carries the session and auth tokens from the
/// [`SessionStore`] and refreshes the session token from the response.
#[derive(Debug, Clone)]
pub struct StorefrontApi {
    client: FetchClient,
    config: ClientConfig,
    session: SessionStore,
}

impl StorefrontApi {
    /// Client sending real HTTP requests.
    pub fn new(config: ClientConfig, session: SessionStore) -> Self {
        Self::with_transport(config, session, Arc::new(pulga_fetch::ReqwestTransport::new()))
    }

    /// Client sending through a custom transport.
    pub fn with_transport(
        config: ClientConfig,
        session: SessionStore,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let client = FetchClient::new(transport)
            .with_base_url(config.api_base())
            .with_default_header("Accept", "application/json")
            .with_interceptor(Arc::new(SessionPropagator::new(session.clone())));
        Self {
            client,
            config,
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .client
            .get(path)
            .query(query)?
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json()?)
    }

    /// Run the search described by `filters`.
    ///
    /// The surprise-me category fetches an unpaged random sample instead.
    pub async fn search(
        &self,
        filters: &FilterState,
        page: u32,
        page_size: u32,
    ) -> Result<ProductPage, ApiError> {
        match SearchPlan::from_filters(filters, page, page_size) {
            SearchPlan::Paged(params) => {
                debug!(?params, "searching products");
                let payload: SearchPayload = self.get_json(Endpoints::SEARCH, &params).await?;
                Ok(payload.into_page(params.page, params.page_size))
            }
            SearchPlan::RandomSample(_) => {
                let params = RandomParams {
                    limit: self.config.random_sample_size,
                };
                debug!(limit = params.limit, "fetching random sample");
                let payload: SearchPayload =
                    self.get_json(Endpoints::RANDOM_PRODUCTS, &params).await?;
                Ok(payload.into_sample(page_size))
            }
        }
    }

    /// Unfiltered listing.
    pub async fn fetch_all(&self, page: u32) -> Result<ProductPage, ApiError> {
        self.search(&FilterState::new(), page, self.config.page_size)
            .await
    }

    /// Autocomplete entries for `text`. Blank text returns the history.
    ///
    /// Never fails: errors yield an empty list.
    pub async fn fetch_suggestions(&self, text: &str) -> Vec<Suggestion> {
        let query = [("texto", text.trim())];
        match self.get_json(Endpoints::SUGGESTIONS, &query).await {
            Ok(list) => list,
            Err(e) => {
                warn!(error = %e, "failed to fetch suggestions");
                Vec::new()
            }
        }
    }

    /// Browse categories with the two synthetic entries first.
    ///
    /// Falls back to the static category list on any error.
    pub async fn fetch_categories(&self) -> Vec<Category> {
        let api_url = self.config.api_base();
        match self.get_json::<Vec<Category>, _>(Endpoints::CATEGORIES, &NO_QUERY).await {
            Ok(list) => Category::with_specials(list, api_url),
            Err(e) => {
                warn!(error = %e, "failed to fetch categories, using fallback list");
                Category::fallback(api_url)
            }
        }
    }

    /// Most clicked products that still exist.
    pub async fn fetch_popular(&self, limit: u32) -> Result<Vec<PopularProduct>, ApiError> {
        let popular: PopularProducts = self
            .get_json(Endpoints::TOP_PRODUCTS, &[("limit", limit)])
            .await?;
        Ok(popular.into_complete())
    }

    /// Record a product click for analytics. Returns whether it was accepted.
    ///
    /// Failures are only logged.
    pub async fn record_click(&self, product_id: &ProductId, name: &str) -> bool {
        let event = ClickEvent { product_id, name };
        let result = async {
            self.client
                .post(Endpoints::CLICK)
                .json(&event)?
                .send()
                .await?
                .error_for_status()
        }
        .await;

        match result {
            Ok(_) => {
                debug!(%product_id, "click recorded");
                true
            }
            Err(e) => {
                warn!(%product_id, error = %e, "failed to record click");
                false
            }
        }
    }

    pub async fn delete_history_item(&self, id: &HistoryId) -> Result<(), ApiError> {
        self.client
            .delete(Endpoints::history_item(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn clear_history(&self) -> Result<(), ApiError> {
        self.client
            .delete(Endpoints::HISTORY)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// External detail page of a product.
    ///
    /// Uses the publication id, or the product id when the listing has none.
    pub fn detail_url(&self, product: &Product) -> String {
        let publication = product
            .id
            .as_ref()
            .map(PublicationId::as_str)
            .unwrap_or_else(|| product.product_id.as_str());
        self.config.detail_page(publication)
    }
}
