use thiserror::Error;

/// Errors raised while building requests or reading responses in tests.
#[derive(Error, Debug)]
pub enum TestError {
    /// Request could not be assembled (invalid URI or header value).
    #[error(transparent)]
    Http(#[from] axum::http::Error),

    /// Response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[from] axum::Error),

    /// Response body was not the expected JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Response body was not UTF-8.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}
