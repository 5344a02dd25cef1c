use axum::{routing::get, Router};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto, MessageDto, ValidationErrorDto},
        movie::{CreateMovieDto, Genre, MovieDto, UpdateMovieDto},
    },
    server::{
        controller::{index, movie, payment},
        state::AppState,
    },
};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Movie Catalog API"),
    paths(
        index::index,
        movie::get_movies,
        movie::get_movie_by_id,
        movie::create_movie,
        movie::update_movie,
        movie::delete_movie,
        movie::movie_preflight,
        payment::payment_methods,
        payment::payment_token,
    ),
    components(schemas(
        MovieDto,
        CreateMovieDto,
        UpdateMovieDto,
        Genre,
        MessageDto,
        ErrorDto,
        ValidationErrorDto,
        FieldErrorDto,
    )),
    tags(
        (name = "index", description = "Service status"),
        (name = "movie", description = "Movie catalog CRUD"),
        (name = "payment", description = "Mock payment gateway JSONP endpoints"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/movies", get(movie::get_movies).post(movie::create_movie))
        .route(
            "/movies/{id}",
            get(movie::get_movie_by_id)
                .patch(movie::update_movie)
                .delete(movie::delete_movie)
                .options(movie::movie_preflight),
        )
        .route(
            "/payments-api/4.0/service.payment",
            get(payment::payment_methods),
        )
        .route("/payments-api/4.0/service.token", get(payment::payment_token))
        .route(OPENAPI_PATH, get(index::openapi))
}
