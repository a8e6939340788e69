//! Async HTTP client utilities for the Pulga storefront.
//!
//! A small builder API over a pluggable [`Transport`], with automatic JSON
//! handling and [`Interceptor`] hooks that run around every request.
//!
//! # Example
//!
//! ```rust,ignore
//! use pulga_fetch::FetchClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Category {
//!     nombre: String,
//! }
//!
//! let client = FetchClient::default().with_base_url("http://localhost:5610");
//!
//! let categories: Vec<Category> = client
//!     .get("/api/categories")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod interceptor;
pub mod mock;
mod request;
mod response;
mod transport;

pub use error::FetchError;
pub use interceptor::Interceptor;
pub use mock::MockTransport;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use transport::Transport;
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;

use std::collections::HashMap;
use std::sync::Arc;

/// HTTP client for outbound requests.
///
/// Cloning is cheap; clones share the transport and interceptors.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    interceptors: Vec<Arc<dyn Interceptor>>,
    transport: Arc<dyn Transport>,
}

#[cfg(feature = "reqwest")]
impl Default for FetchClient {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestTransport::new()))
    }
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .field("interceptors", &self.interceptors.len())
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a client sending through `transport`.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            interceptors: Vec::new(),
            transport,
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Register an interceptor. Interceptors run in registration order.
    pub fn with_interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        self.request(Method::Post, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        let mut builder = RequestBuilder::new(method, self.resolve(url.into()));
        for (key, value) in &self.default_headers {
            builder.set_header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            client: self,
            builder,
        }
    }

    fn resolve(&self, url: String) -> String {
        match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        }
    }

    async fn execute(&self, mut builder: RequestBuilder) -> Result<Response, FetchError> {
        for interceptor in &self.interceptors {
            interceptor.before(&mut builder);
        }

        let method = builder.method();
        let url = builder.url();
        tracing::debug!(%method, %url, "sending request");

        let response = self.transport.execute(builder).await.map_err(|e| {
            tracing::debug!(%method, %url, error = %e, "request failed");
            e
        })?;

        tracing::debug!(%method, %url, status = response.status, "received response");
        for interceptor in &self.interceptors {
            interceptor.after(&response);
        }
        Ok(response)
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder<'a> {
    client: &'a FetchClient,
    builder: RequestBuilder,
}

impl<'a> ClientRequestBuilder<'a> {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Append URL-encoded query parameters.
    pub fn query<T: serde::Serialize + ?Sized>(mut self, params: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.query(params)?;
        Ok(self)
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize + ?Sized>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// The request as built so far.
    pub fn build(self) -> RequestBuilder {
        self.builder
    }

    /// Send the request and return the response, whatever its status.
    pub async fn send(self) -> Result<Response, FetchError> {
        self.client.execute(self.builder).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Interceptor, Method, Response, Transport};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Tagger {
        seen: AtomicUsize,
    }

    impl Interceptor for Tagger {
        fn before(&self, request: &mut RequestBuilder) {
            request.set_header("X-Tag", "on");
        }

        fn after(&self, _response: &Response) {
            self.seen.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn client(mock: &Arc<MockTransport>) -> FetchClient {
        FetchClient::new(mock.clone()).with_base_url("http://api.test/")
    }

    #[tokio::test]
    async fn test_base_url_is_prepended() {
        let mock = Arc::new(MockTransport::new());
        mock.respond_json(Method::Get, "/api/categories", serde_json::json!([]));

        let resp = client(&mock).get("/api/categories").send().await.unwrap();
        assert!(resp.is_success());
        assert_eq!(
            mock.last_request().unwrap().url(),
            "http://api.test/api/categories"
        );
    }

    #[tokio::test]
    async fn test_absolute_url_bypasses_base() {
        let mock = Arc::new(MockTransport::new());
        client(&mock).get("https://other.test/x").send().await.unwrap();
        assert_eq!(mock.last_request().unwrap().url(), "https://other.test/x");
    }

    #[tokio::test]
    async fn test_interceptors_run_on_every_response() {
        let mock = Arc::new(MockTransport::new());
        let tagger = Arc::new(Tagger {
            seen: AtomicUsize::new(0),
        });
        let client = client(&mock).with_interceptor(tagger.clone());

        // 404 from the mock still reaches `after`.
        client.get("/missing").send().await.unwrap();
        client.delete("/api/search/history").send().await.unwrap();

        assert_eq!(tagger.seen.load(Ordering::SeqCst), 2);
        assert!(mock
            .requests()
            .iter()
            .all(|r| r.header_value("x-tag") == Some("on")));
    }

    #[tokio::test]
    async fn test_default_headers_applied() {
        let mock = Arc::new(MockTransport::new());
        client(&mock)
            .with_default_header("Accept", "application/json")
            .get("/x")
            .send()
            .await
            .unwrap();
        assert_eq!(
            mock.last_request().unwrap().header_value("accept"),
            Some("application/json")
        );
    }
}
