//! Session token propagation.

use pulga_cache::SessionStore;
use pulga_fetch::{Interceptor, RequestBuilder, Response};

/// Header carrying the session token in both directions.
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Body field that may carry a refreshed session token.
pub const SESSION_BODY_FIELD: &str = "sessionId";

/// Attaches the stored tokens to every request and picks up refreshed
/// session tokens from every response.
///
/// When a response carries a token in both the header and the body, the
/// body value is stored last and wins.
#[derive(Debug, Clone)]
pub struct SessionPropagator {
    store: SessionStore,
}

impl SessionPropagator {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    fn update(&self, incoming: &str, source: &'static str) {
        let incoming = incoming.trim();
        if incoming.is_empty() {
            return;
        }
        if self.store.session_id().as_deref() != Some(incoming) {
            tracing::info!(source, "session token updated");
            self.store.set_session_id(incoming);
        }
    }
}

impl Interceptor for SessionPropagator {
    fn before(&self, request: &mut RequestBuilder) {
        if let Some(id) = self.store.session_id() {
            request.set_header(SESSION_HEADER, id);
        }
        if let Some(token) = self.store.auth_token() {
            request.set_header("Authorization", format!("Bearer {}", token));
        }
    }

    fn after(&self, response: &Response) {
        if let Some(id) = response.header(SESSION_HEADER) {
            self.update(id, "header");
        }
        let body_id = response.json_value().and_then(|body| {
            body.get(SESSION_BODY_FIELD)
                .and_then(|v| v.as_str())
                .map(str::to_string)
        });
        if let Some(id) = body_id {
            self.update(&id, "body");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulga_fetch::Method;
    use std::collections::HashMap;

    fn propagator() -> SessionPropagator {
        SessionPropagator::new(SessionStore::in_memory())
    }

    #[test]
    fn test_no_headers_without_tokens() {
        let mut req = RequestBuilder::new(Method::Get, "/api/categories");
        propagator().before(&mut req);
        assert!(req.headers().is_empty());
    }

    #[test]
    fn test_attaches_both_tokens() {
        let p = propagator();
        p.store().set_session_id("s-1");
        p.store().set_auth_token("t-1");

        let mut req = RequestBuilder::new(Method::Get, "/api/categories");
        p.before(&mut req);
        assert_eq!(req.header_value("x-session-id"), Some("s-1"));
        assert_eq!(req.header_value("authorization"), Some("Bearer t-1"));
    }

    #[test]
    fn test_header_token_is_stored() {
        let p = propagator();
        let resp =
            Response::new(200, HashMap::new(), Vec::new()).with_header("x-session-id", "s-2");
        p.after(&resp);
        assert_eq!(p.store().session_id().as_deref(), Some("s-2"));
    }

    #[test]
    fn test_body_token_wins_over_header() {
        let p = propagator();
        let body = serde_json::json!({"productos": [], "sessionId": "from-body"});
        let resp = Response::json_body(200, &body).with_header(SESSION_HEADER, "from-header");
        p.after(&resp);
        assert_eq!(p.store().session_id().as_deref(), Some("from-body"));
    }

    #[test]
    fn test_non_object_body_is_ignored() {
        let p = propagator();
        p.store().set_session_id("keep");
        p.after(&Response::json_body(200, &serde_json::json!([1, 2])));
        p.after(&Response::new(500, HashMap::new(), b"oops".to_vec()));
        assert_eq!(p.store().session_id().as_deref(), Some("keep"));
    }
}
