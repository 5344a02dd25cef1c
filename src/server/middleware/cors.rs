//! Static origin allow-list for cross-origin requests.
//!
//! Only `GET /movies` and the per-resource preflight carry CORS headers. A matching
//! origin (or the literal `null` origin sent by sandboxed documents and `file://` pages)
//! is answered with a wildcard `Access-Control-Allow-Origin`; any other origin gets no
//! CORS headers at all and the browser blocks the response.

use axum::http::{
    header::{ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN},
    HeaderMap, HeaderValue,
};
use std::sync::Arc;

/// Methods advertised on a successful preflight.
pub const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE";

const NULL_ORIGIN: &str = "null";

#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: Arc<[String]>,
}

impl CorsPolicy {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self {
            allowed_origins: allowed_origins.into(),
        }
    }

    /// Whether the request's `Origin` header is in the allow-list or is `null`.
    pub fn allows(&self, request_headers: &HeaderMap) -> bool {
        let Some(origin) = request_headers
            .get(ORIGIN)
            .and_then(|value| value.to_str().ok())
        else {
            return false;
        };

        origin == NULL_ORIGIN || self.allowed_origins.iter().any(|allowed| allowed == origin)
    }

    /// Response headers for a simple cross-origin request.
    ///
    /// # Returns
    /// - `Access-Control-Allow-Origin: *` - Origin is allowed
    /// - empty map - Origin is missing or not allowed
    pub fn simple_headers(&self, request_headers: &HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if self.allows(request_headers) {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        }

        headers
    }

    /// Response headers for a preflight, adding the allowed methods to the simple headers.
    pub fn preflight_headers(&self, request_headers: &HeaderMap) -> HeaderMap {
        let mut headers = self.simple_headers(request_headers);

        if !headers.is_empty() {
            headers.insert(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOWED_METHODS),
            );
        }

        headers
    }
}
