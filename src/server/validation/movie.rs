//! Validation of movie request payloads.
//!
//! Payloads arrive as raw JSON values so that every violation can be reported at once,
//! including missing fields, wrong types and out-of-range values. Unknown fields are
//! ignored.

use serde_json::{Map, Value};
use std::str::FromStr;
use url::Url;

use crate::{
    model::movie::Genre,
    server::{
        error::validation::{FieldIssue, ValidationError},
        model::movie::{CreateMovieParams, UpdateMovieParams},
    },
};

pub const MIN_YEAR: i64 = 1900;
pub const MAX_YEAR: i64 = 2100;
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

/// Validates a full create payload. Every field is required.
///
/// # Returns
/// - `Ok(CreateMovieParams)` - All fields present and well-formed
/// - `Err(ValidationError)` - One issue per missing or malformed field
pub fn validate_movie(body: &Value) -> Result<CreateMovieParams, ValidationError> {
    let mut reader = FieldReader::new(body)?;

    let title = reader.required("title", parse_text);
    let year = reader.required("year", parse_year);
    let director = reader.required("director", parse_text);
    let duration = reader.required("duration", parse_duration);
    let rating = reader.required("rating", parse_rating);
    let poster = reader.required("poster", parse_poster);
    let genre = reader.required("genre", parse_genres);

    match (title, year, director, duration, rating, poster, genre) {
        (
            Some(title),
            Some(year),
            Some(director),
            Some(duration),
            Some(rating),
            Some(poster),
            Some(genre),
        ) => Ok(CreateMovieParams {
            title,
            year,
            director,
            duration,
            rating,
            poster,
            genre,
        }),
        _ => Err(reader.into_error()),
    }
}

/// Validates a partial update payload. Every field is optional, but present fields must
/// satisfy the same constraints as on create.
///
/// # Returns
/// - `Ok(UpdateMovieParams)` - Present fields are well-formed (may be empty)
/// - `Err(ValidationError)` - One issue per malformed present field
pub fn validate_partial_movie(body: &Value) -> Result<UpdateMovieParams, ValidationError> {
    let mut reader = FieldReader::new(body)?;

    let params = UpdateMovieParams {
        title: reader.optional("title", parse_text),
        year: reader.optional("year", parse_year),
        director: reader.optional("director", parse_text),
        duration: reader.optional("duration", parse_duration),
        rating: reader.optional("rating", parse_rating),
        poster: reader.optional("poster", parse_poster),
        genre: reader.optional("genre", parse_genres),
    };

    reader.finish()?;

    Ok(params)
}

/// Reads fields out of a JSON object, accumulating issues instead of stopping at the first.
struct FieldReader<'a> {
    body: &'a Map<String, Value>,
    issues: Vec<FieldIssue>,
}

impl<'a> FieldReader<'a> {
    fn new(body: &'a Value) -> Result<Self, ValidationError> {
        match body.as_object() {
            Some(body) => Ok(Self {
                body,
                issues: Vec::new(),
            }),
            None => Err(ValidationError::new(vec![FieldIssue::new(
                "body",
                "Expected a JSON object",
            )])),
        }
    }

    fn required<T>(&mut self, field: &str, parse: fn(&Value) -> Result<T, String>) -> Option<T> {
        match self.body.get(field) {
            Some(value) => self.check(field, value, parse),
            None => {
                self.issues.push(FieldIssue::new(field, "Required"));
                None
            }
        }
    }

    fn optional<T>(&mut self, field: &str, parse: fn(&Value) -> Result<T, String>) -> Option<T> {
        let value = self.body.get(field)?;
        self.check(field, value, parse)
    }

    fn check<T>(
        &mut self,
        field: &str,
        value: &Value,
        parse: fn(&Value) -> Result<T, String>,
    ) -> Option<T> {
        match parse(value) {
            Ok(parsed) => Some(parsed),
            Err(message) => {
                self.issues.push(FieldIssue::new(field, message));
                None
            }
        }
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.issues))
        }
    }

    fn into_error(self) -> ValidationError {
        ValidationError::new(self.issues)
    }
}

fn parse_text(value: &Value) -> Result<String, String> {
    let text = value.as_str().ok_or("Expected a string")?;

    if text.trim().is_empty() {
        return Err("Must not be empty".to_string());
    }

    Ok(text.to_string())
}

fn parse_year(value: &Value) -> Result<i32, String> {
    let year = value.as_i64().ok_or("Expected an integer")?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(format!("Must be between {} and {}", MIN_YEAR, MAX_YEAR));
    }

    // In range, so the conversion cannot fail
    i32::try_from(year).map_err(|e| e.to_string())
}

fn parse_duration(value: &Value) -> Result<u32, String> {
    let duration = value.as_i64().ok_or("Expected an integer")?;

    if duration < 1 {
        return Err("Must be a positive integer".to_string());
    }

    u32::try_from(duration).map_err(|_| format!("Must be at most {}", u32::MAX))
}

fn parse_rating(value: &Value) -> Result<f64, String> {
    let rating = value.as_f64().ok_or("Expected a number")?;

    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!("Must be between {} and {}", MIN_RATING, MAX_RATING));
    }

    Ok(rating)
}

fn parse_poster(value: &Value) -> Result<String, String> {
    let poster = value.as_str().ok_or("Expected a string")?;

    Url::parse(poster).map_err(|e| format!("Must be a valid URL: {}", e))?;

    Ok(poster.to_string())
}

fn parse_genres(value: &Value) -> Result<Vec<Genre>, String> {
    let entries = value.as_array().ok_or("Expected an array of genres")?;

    if entries.is_empty() {
        return Err("Must contain at least one genre".to_string());
    }

    let mut genres = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let name = entry
            .as_str()
            .ok_or_else(|| format!("Entry {} must be a string", index))?;

        let genre = Genre::from_str(name).map_err(|_| {
            format!(
                "Invalid genre '{}' at index {}, expected one of: {}",
                name,
                index,
                allowed_genres()
            )
        })?;

        if genres.contains(&genre) {
            return Err(format!("Duplicate genre '{}'", genre));
        }

        genres.push(genre);
    }

    Ok(genres)
}

fn allowed_genres() -> String {
    Genre::ALL
        .iter()
        .map(Genre::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
