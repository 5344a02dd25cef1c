//! Domain models for movie records.
//!
//! Defines the stored `Movie` record and the parameter types produced by payload
//! validation for create and partial-update operations.

use crate::model::movie::{Genre, MovieDto};

/// A movie record held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    /// Opaque identifier assigned by the store at creation; never changes afterwards.
    pub id: String,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Running time in minutes.
    pub duration: u32,
    pub rating: f64,
    /// Absolute URL of the poster image.
    pub poster: String,
    /// Non-empty list of distinct genres.
    pub genre: Vec<Genre>,
}

impl Movie {
    /// Builds a record from validated fields and a freshly generated identifier.
    pub fn from_params(id: String, params: CreateMovieParams) -> Self {
        Self {
            id,
            title: params.title,
            year: params.year,
            director: params.director,
            duration: params.duration,
            rating: params.rating,
            poster: params.poster,
            genre: params.genre,
        }
    }

    /// Converts a DTO into a domain model, used when loading seed data.
    pub fn from_dto(dto: MovieDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            year: dto.year,
            director: dto.director,
            duration: dto.duration,
            rating: dto.rating,
            poster: dto.poster,
            genre: dto.genre,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> MovieDto {
        MovieDto {
            id: self.id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            rating: self.rating,
            poster: self.poster,
            genre: self.genre,
        }
    }

    /// Whether any of this movie's genres matches `name`, ignoring case.
    pub fn has_genre(&self, name: &str) -> bool {
        self.genre.iter().any(|genre| genre.matches_name(name))
    }

    /// Shallow merge of a partial update over this record.
    ///
    /// Present fields replace the stored value wholesale (including the genre list);
    /// absent fields and the identifier are left untouched.
    pub fn apply(&mut self, changes: UpdateMovieParams) {
        let UpdateMovieParams {
            title,
            year,
            director,
            duration,
            rating,
            poster,
            genre,
        } = changes;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(year) = year {
            self.year = year;
        }
        if let Some(director) = director {
            self.director = director;
        }
        if let Some(duration) = duration {
            self.duration = duration;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        if let Some(poster) = poster {
            self.poster = poster;
        }
        if let Some(genre) = genre {
            self.genre = genre;
        }
    }
}

/// Validated fields for creating a movie. The identifier is never client-supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMovieParams {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub rating: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// Validated subset of fields for a partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateMovieParams {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub rating: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
}

impl UpdateMovieParams {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
