//! In-memory [`Transport`] for tests.

use crate::{FetchError, Method, RequestBuilder, Response, Transport};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

type Outcome = Result<Response, FetchError>;

/// Answers requests from canned outcomes keyed by method and path.
///
/// Several outcomes registered on the same route are served in order; the
/// last one repeats. Unknown routes answer 404. Every executed request is
/// recorded.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<Outcome>>>,
    requests: Mutex<Vec<RequestBuilder>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method path`.
    pub fn respond(&self, method: Method, path: impl Into<String>, response: Response) -> &Self {
        self.push(method, path.into(), Ok(response))
    }

    /// Queue a 200 JSON response.
    pub fn respond_json(
        &self,
        method: Method,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> &Self {
        self.respond(method, path, Response::json_body(200, &body))
    }

    /// Queue a transport failure.
    pub fn fail(&self, method: Method, path: impl Into<String>, error: FetchError) -> &Self {
        self.push(method, path.into(), Err(error))
    }

    fn push(&self, method: Method, path: String, outcome: Outcome) -> &Self {
        lock(&self.routes)
            .entry((method, path))
            .or_default()
            .push_back(outcome);
        self
    }

    /// All requests executed so far.
    pub fn requests(&self) -> Vec<RequestBuilder> {
        lock(&self.requests).clone()
    }

    /// Requests executed against `method path`.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<RequestBuilder> {
        lock(&self.requests)
            .iter()
            .filter(|r| r.method() == method && r.path() == path)
            .cloned()
            .collect()
    }

    pub fn last_request(&self) -> Option<RequestBuilder> {
        lock(&self.requests).last().cloned()
    }

    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let key = (request.method(), request.path().to_string());
        lock(&self.requests).push(request);

        let mut routes = lock(&self.routes);
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::RequestError("empty route".to_string()))),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(FetchError::RequestError("empty route".to_string()))),
            None => Ok(Response::new(404, HashMap::new(), b"Not Found".to_vec())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_in_order_then_repeats_last() {
        let mock = MockTransport::new();
        mock.respond_json(Method::Get, "/a", serde_json::json!(1))
            .respond_json(Method::Get, "/a", serde_json::json!(2));

        let req = || RequestBuilder::new(Method::Get, "http://h/a");
        let bodies: Vec<i32> = vec![
            mock.execute(req()).await.unwrap().json().unwrap(),
            mock.execute(req()).await.unwrap().json().unwrap(),
            mock.execute(req()).await.unwrap().json().unwrap(),
        ];
        assert_eq!(bodies, [1, 2, 2]);
        assert_eq!(mock.requests_to(Method::Get, "/a").len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let mock = MockTransport::new();
        let resp = mock
            .execute(RequestBuilder::new(Method::Delete, "http://h/nope"))
            .await
            .unwrap();
        assert_eq!(resp.status, 404);
    }

    #[tokio::test]
    async fn test_failure_is_returned() {
        let mock = MockTransport::new();
        mock.fail(Method::Post, "/x", FetchError::RequestError("down".into()));
        let err = mock
            .execute(RequestBuilder::new(Method::Post, "http://h/x"))
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::RequestError("down".into()));
    }
}
