use crate::server::{
    data::movie::MovieStore,
    error::AppError,
    model::movie::{CreateMovieParams, Movie, UpdateMovieParams},
};

pub const MOVIE_NOT_FOUND: &str = "Movie not found";

pub struct MovieService<'a> {
    store: &'a MovieStore,
}

impl<'a> MovieService<'a> {
    pub fn new(store: &'a MovieStore) -> Self {
        Self { store }
    }

    /// Lists movies, optionally filtered by genre (case-insensitive).
    ///
    /// An empty filter is treated as no filter.
    ///
    /// # Returns
    /// - `Ok(Vec<Movie>)` - All movies, or the non-empty filtered subset
    /// - `Err(AppError::NotFound)` - A genre filter matched nothing
    pub async fn list(&self, genre: Option<&str>) -> Result<Vec<Movie>, AppError> {
        let genre = genre.filter(|genre| !genre.is_empty());

        let movies = self.store.list(genre).await;

        match genre {
            Some(genre) if movies.is_empty() => Err(AppError::NotFound(format!(
                "Movie not found by genre: {}",
                genre
            ))),
            _ => {
                tracing::debug!("Listed {} movies (genre filter: {:?})", movies.len(), genre);
                Ok(movies)
            }
        }
    }

    /// Gets a movie by identifier
    pub async fn get_by_id(&self, id: &str) -> Result<Movie, AppError> {
        let movie = self
            .store
            .get_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound(MOVIE_NOT_FOUND.to_string()))?;

        tracing::debug!("Fetched movie {}", movie.id);

        Ok(movie)
    }

    /// Creates a movie with a freshly generated identifier
    pub async fn create(&self, params: CreateMovieParams) -> Result<Movie, AppError> {
        let movie = self.store.create(params).await;

        tracing::info!("Created movie {} ({})", movie.id, movie.title);

        Ok(movie)
    }

    /// Merges a validated partial update over an existing movie
    pub async fn update(&self, id: &str, changes: UpdateMovieParams) -> Result<Movie, AppError> {
        if changes.is_empty() {
            tracing::debug!("Update for movie {} carries no known fields", id);
        }

        let movie = self
            .store
            .update_by_id(id, changes)
            .await
            .ok_or_else(|| AppError::NotFound(MOVIE_NOT_FOUND.to_string()))?;

        tracing::info!("Updated movie {}", movie.id);

        Ok(movie)
    }

    /// Deletes a movie by identifier
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !self.store.delete_by_id(id).await {
            return Err(AppError::NotFound(MOVIE_NOT_FOUND.to_string()));
        }

        tracing::info!("Deleted movie {}", id);

        Ok(())
    }
}
