//! Movie Catalog Test Utils
//!
//! Provides shared testing utilities for exercising the HTTP surface of the movie catalog
//! in-process. Requests are driven straight through an axum `Router` with
//! `tower::ServiceExt::oneshot`, so no socket is bound and every test owns its own state.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring a test context (e.g. request origin)
//! - **TestContext**: Wraps the router and offers request helpers per HTTP method
//! - **TestResponse**: Buffered response with status, headers and body accessors
//! - **TestError**: Error types that can occur while building or sending requests
//! - **factory**: JSON payload factories with valid defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory::movie::MoviePayloadFactory};
//!
//! #[tokio::test]
//! async fn creates_movie() -> Result<(), TestError> {
//!     let test = TestBuilder::new().build(app);
//!
//!     let response = test.post_json("/movies", &MoviePayloadFactory::new().build()).await?;
//!     assert_eq!(response.status, StatusCode::CREATED);
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod response;
