use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    model::movie::MovieDto,
    server::{
        config::Config,
        data::movie::MovieStore,
        error::AppError,
        middleware::cors::CorsPolicy,
        model::movie::Movie,
        router,
        state::AppState,
        util::id::RandomIdGenerator,
    },
};

const SEED_MOVIES: &str = include_str!("data/seed_movies.json");

const DEFAULT_LOG_FILTER: &str = "movie_catalog=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG` when set, otherwise logs this crate and request traces at info.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt().with_env_filter(filter).init();
}

/// Parses the embedded seed list into domain models.
///
/// # Returns
/// - `Ok(Vec<Movie>)` - Seed movies in file order
/// - `Err(AppError::SerdeJsonErr)` - Seed file is malformed
pub fn seed_movies() -> Result<Vec<Movie>, AppError> {
    let movies: Vec<MovieDto> = serde_json::from_str(SEED_MOVIES)?;

    Ok(movies.into_iter().map(Movie::from_dto).collect())
}

/// Builds the movie store seeded with the embedded list and random identifiers.
pub fn seed_movie_store() -> Result<MovieStore, AppError> {
    let movies = seed_movies()?;

    tracing::info!("Seeding movie store with {} movies", movies.len());

    Ok(MovieStore::new(movies, Arc::new(RandomIdGenerator)))
}

/// Assembles the application state from configuration and a store.
pub fn build_state(config: &Config, movies: MovieStore) -> AppState {
    AppState::new(movies, CorsPolicy::new(config.allowed_origins.clone()))
}

/// Builds the full HTTP application: routes, state and request tracing.
pub fn build_app(state: AppState) -> Router {
    router::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves until Ctrl+C or SIGTERM.
///
/// # Returns
/// - `Ok(())` - Server shut down gracefully
/// - `Err(AppError::IoErr)` - Failed to bind or serve
pub async fn serve(config: &Config, app: Router) -> Result<(), AppError> {
    let address = SocketAddr::new(config.host, config.port);

    let listener = TcpListener::bind(address).await?;
    tracing::info!("Server is running on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
