use axum::{
    body::{to_bytes, Bytes},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use serde_json::Value;

use crate::error::TestError;

/// Upper bound on buffered response bodies.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub async fn from_response(response: Response) -> Result<Self, TestError> {
        let (parts, body) = response.into_parts();
        let body = to_bytes(body, MAX_BODY_BYTES).await?;

        Ok(Self {
            status: parts.status,
            headers: parts.headers,
            body,
        })
    }

    /// Parses the body as JSON.
    pub fn json(&self) -> Result<Value, TestError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Returns the body as UTF-8 text.
    pub fn text(&self) -> Result<String, TestError> {
        Ok(String::from_utf8(self.body.to_vec())?)
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}
