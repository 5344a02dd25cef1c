use std::sync::Arc;
use tokio::sync::RwLock;

use crate::server::{
    model::movie::{CreateMovieParams, Movie, UpdateMovieParams},
    util::id::IdGenerator,
};

/// Ordered in-memory collection of movie records.
///
/// Cloning is cheap and yields a handle to the same collection. Each operation holds the
/// lock for its whole duration, so operations never interleave.
#[derive(Clone)]
pub struct MovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
    ids: Arc<dyn IdGenerator>,
}

impl MovieStore {
    /// Creates a store holding `seed` in order, drawing new identifiers from `ids`.
    pub fn new(seed: Vec<Movie>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(seed)),
            ids,
        }
    }

    /// Returns all movies, or only those tagged with `genre` (case-insensitive) when given.
    ///
    /// An unmatched filter yields an empty list; deciding whether that is an error is
    /// left to the caller.
    pub async fn list(&self, genre: Option<&str>) -> Vec<Movie> {
        let movies = self.movies.read().await;

        match genre {
            Some(genre) => movies
                .iter()
                .filter(|movie| movie.has_genre(genre))
                .cloned()
                .collect(),
            None => movies.clone(),
        }
    }

    /// Gets a movie by identifier
    pub async fn get_by_id(&self, id: &str) -> Option<Movie> {
        self.movies
            .read()
            .await
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
    }

    /// Assigns a fresh identifier, appends the movie and returns it
    pub async fn create(&self, params: CreateMovieParams) -> Movie {
        let movie = Movie::from_params(self.ids.generate(), params);

        self.movies.write().await.push(movie.clone());

        movie
    }

    /// Merges `changes` over the stored movie.
    /// Returns None if no movie has that identifier
    pub async fn update_by_id(&self, id: &str, changes: UpdateMovieParams) -> Option<Movie> {
        let mut movies = self.movies.write().await;

        let movie = movies.iter_mut().find(|movie| movie.id == id)?;
        movie.apply(changes);

        Some(movie.clone())
    }

    /// Removes a movie.
    /// Returns true if removed, false if no movie has that identifier
    pub async fn delete_by_id(&self, id: &str) -> bool {
        let mut movies = self.movies.write().await;

        match movies.iter().position(|movie| movie.id == id) {
            Some(index) => {
                movies.remove(index);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.movies.read().await.len()
    }
}
