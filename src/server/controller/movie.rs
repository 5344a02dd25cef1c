use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        movie::{CreateMovieDto, MovieDto, UpdateMovieDto},
    },
    server::{
        error::AppError,
        model::movie::Movie,
        service::movie::MovieService,
        state::AppState,
        validation::movie::{validate_movie, validate_partial_movie},
    },
};

/// Tag for grouping movie endpoints in OpenAPI documentation
pub static MOVIE_TAG: &str = "movie";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieListParams {
    /// Only return movies tagged with this genre (case-insensitive)
    pub genre: Option<String>,
}

fn into_dtos(movies: Vec<Movie>) -> Vec<MovieDto> {
    movies.into_iter().map(Movie::into_dto).collect()
}

/// List movies, optionally filtered by genre.
///
/// Allowed origins receive `Access-Control-Allow-Origin: *` on every response, errors
/// included.
///
/// # Returns
/// - `200 OK` - All movies, or the movies matching the genre filter
/// - `400 Bad Request` - Query string could not be decoded (e.g. repeated `genre`)
/// - `404 Not Found` - The genre filter matched no movie
#[utoipa::path(
    get,
    path = "/movies",
    tag = MOVIE_TAG,
    params(MovieListParams),
    responses(
        (status = 200, description = "Successfully retrieved movies", body = Vec<MovieDto>),
        (status = 400, description = "Undecodable query string", body = ErrorDto),
        (status = 404, description = "No movie matches the genre filter", body = MessageDto)
    ),
)]
pub async fn get_movies(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<MovieListParams>, QueryRejection>,
) -> Response {
    let cors = state.cors.simple_headers(&headers);

    match list_movies(&state, query).await {
        Ok(movies) => (cors, Json(into_dtos(movies))).into_response(),
        Err(err) => (cors, err).into_response(),
    }
}

async fn list_movies(
    state: &AppState,
    query: Result<Query<MovieListParams>, QueryRejection>,
) -> Result<Vec<Movie>, AppError> {
    let Query(params) = query?;

    let service = MovieService::new(&state.movies);

    service.list(params.genre.as_deref()).await
}

/// Get a movie by identifier.
///
/// # Returns
/// - `200 OK` - The movie
/// - `404 Not Found` - No movie has this identifier
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = MOVIE_TAG,
    params(
        ("id" = String, Path, description = "Movie identifier")
    ),
    responses(
        (status = 200, description = "Successfully retrieved movie", body = MovieDto),
        (status = 404, description = "Movie not found", body = MessageDto)
    ),
)]
pub async fn get_movie_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.movies);

    let movie = service.get_by_id(&id).await?;

    Ok((StatusCode::OK, Json(movie.into_dto())))
}

/// Create a new movie.
///
/// Validates the full payload and assigns a server-generated identifier. Any `id` in the
/// payload is ignored.
///
/// # Returns
/// - `201 Created` - The created movie including its identifier
/// - `400 Bad Request` - Body is not valid JSON
/// - `422 Unprocessable Entity` - One or more fields missing or malformed
#[utoipa::path(
    post,
    path = "/movies",
    tag = MOVIE_TAG,
    request_body = CreateMovieDto,
    responses(
        (status = 201, description = "Successfully created movie", body = MovieDto),
        (status = 400, description = "Malformed JSON body", body = ErrorDto),
        (status = 422, description = "Invalid movie data", body = ValidationErrorDto)
    ),
)]
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload?;

    let params = validate_movie(&body)?;

    let service = MovieService::new(&state.movies);

    let movie = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(movie.into_dto())))
}

/// Partially update a movie.
///
/// Present fields replace the stored values; omitted fields and the identifier are kept.
/// The payload is validated before the identifier is looked up.
///
/// # Returns
/// - `200 OK` - The updated movie
/// - `400 Bad Request` - Body is not valid JSON
/// - `404 Not Found` - No movie has this identifier
/// - `422 Unprocessable Entity` - A present field is malformed
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    tag = MOVIE_TAG,
    params(
        ("id" = String, Path, description = "Movie identifier")
    ),
    request_body = UpdateMovieDto,
    responses(
        (status = 200, description = "Successfully updated movie", body = MovieDto),
        (status = 400, description = "Malformed JSON body", body = ErrorDto),
        (status = 404, description = "Movie not found", body = MessageDto),
        (status = 422, description = "Invalid movie data", body = ValidationErrorDto)
    ),
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload?;

    let changes = validate_partial_movie(&body)?;

    let service = MovieService::new(&state.movies);

    let movie = service.update(&id, changes).await?;

    Ok((StatusCode::OK, Json(movie.into_dto())))
}

/// Delete a movie.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `404 Not Found` - No movie has this identifier
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = MOVIE_TAG,
    params(
        ("id" = String, Path, description = "Movie identifier")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MessageDto),
        (status = 404, description = "Movie not found", body = MessageDto)
    ),
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MovieService::new(&state.movies);

    service.delete(&id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Movie deleted"))))
}

/// CORS preflight for per-movie routes.
///
/// Always answers `200 OK`; CORS headers are only attached for allowed origins.
#[utoipa::path(
    options,
    path = "/movies/{id}",
    tag = MOVIE_TAG,
    params(
        ("id" = String, Path, description = "Movie identifier")
    ),
    responses(
        (status = 200, description = "Preflight acknowledged")
    ),
)]
pub async fn movie_preflight(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    (StatusCode::OK, state.cors.preflight_headers(&headers), "OK")
}
