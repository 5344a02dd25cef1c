use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::{error::TestError, response::TestResponse};

/// Test context wrapping an application router.
///
/// Each request is sent to a clone of the router, so all requests made through one
/// context observe the same application state.
pub struct TestContext {
    router: Router,
    origin: Option<String>,
}

impl TestContext {
    /// Creates a new context. Prefer `TestBuilder` in tests.
    pub fn new(router: Router, origin: Option<String>) -> Self {
        Self { router, origin }
    }

    pub async fn get(&self, uri: &str) -> Result<TestResponse, TestError> {
        self.send(Method::GET, uri, Body::empty(), None).await
    }

    pub async fn delete(&self, uri: &str) -> Result<TestResponse, TestError> {
        self.send(Method::DELETE, uri, Body::empty(), None).await
    }

    pub async fn options(&self, uri: &str) -> Result<TestResponse, TestError> {
        self.send(Method::OPTIONS, uri, Body::empty(), None).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> Result<TestResponse, TestError> {
        self.send_json(Method::POST, uri, body).await
    }

    pub async fn patch_json(&self, uri: &str, body: &Value) -> Result<TestResponse, TestError> {
        self.send_json(Method::PATCH, uri, body).await
    }

    /// Sends `body` verbatim with a JSON content type, for malformed-payload tests.
    pub async fn send_raw_json(
        &self,
        method: Method,
        uri: &str,
        body: &str,
    ) -> Result<TestResponse, TestError> {
        self.send(
            method,
            uri,
            Body::from(body.to_string()),
            Some("application/json"),
        )
        .await
    }

    async fn send_json(
        &self,
        method: Method,
        uri: &str,
        body: &Value,
    ) -> Result<TestResponse, TestError> {
        let body = serde_json::to_string(body)?;
        self.send_raw_json(method, uri, &body).await
    }

    /// Builds the request, runs it through the router and buffers the response.
    async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Body,
        content_type: Option<&str>,
    ) -> Result<TestResponse, TestError> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(origin) = &self.origin {
            builder = builder.header(header::ORIGIN, origin.as_str());
        }
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        let request = builder.body(body)?;

        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        TestResponse::from_response(response).await
    }
}
