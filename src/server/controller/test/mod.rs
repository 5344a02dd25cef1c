use axum::{
    http::{Method, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use test_utils::{
    builder::TestBuilder, context::TestContext, error::TestError,
    factory::movie::MoviePayloadFactory,
};

use crate::server::{
    data::movie::MovieStore, middleware::cors::CorsPolicy, startup, state::AppState,
    util::id::SequentialIdGenerator,
};

mod create_movie;
mod get_movie_by_id;
mod payment;

const ALLOWED_ORIGIN: &str = "http://localhost:1234";

/// Full application over an empty store with deterministic `movie-N` identifiers
fn app() -> Router {
    let movies = MovieStore::new(Vec::new(), Arc::new(SequentialIdGenerator::default()));
    let cors = CorsPolicy::new(vec![ALLOWED_ORIGIN.to_string()]);

    startup::build_app(AppState::new(movies, cors))
}

fn test() -> TestContext {
    TestBuilder::new().build(app())
}

/// Creates a movie through the API and returns the response body
async fn create(test: &TestContext, payload: Value) -> Result<Value, TestError> {
    let response = test.post_json("/movies", &payload).await?;
    assert_eq!(response.status, StatusCode::CREATED);

    response.json()
}
