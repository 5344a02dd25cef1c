mod model;
mod server;

use crate::server::{config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let movies = startup::seed_movie_store()?;
    let state = startup::build_state(&config, movies);

    tracing::info!("Starting server");

    startup::serve(&config, startup::build_app(state)).await
}
