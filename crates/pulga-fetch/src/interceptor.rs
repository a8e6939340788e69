//! Request/response hooks run by [`crate::FetchClient`] around every call.

use crate::{RequestBuilder, Response};

/// Hook invoked before each request is sent and after each response arrives.
///
/// `after` sees every response, including non-2xx ones, before
/// status checking.
pub trait Interceptor: Send + Sync {
    fn before(&self, request: &mut RequestBuilder);

    fn after(&self, _response: &Response) {}
}
