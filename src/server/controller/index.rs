use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{model::api::MessageDto, server::router::ApiDoc};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static INDEX_TAG: &str = "index";

pub const GREETING: &str = "Movie catalog API running and ready!";

/// Static greeting, doubling as a health check.
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Service is up", body = MessageDto)
    ),
)]
pub async fn index() -> impl IntoResponse {
    Json(MessageDto::new(GREETING))
}

/// Generated OpenAPI document for every route.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
