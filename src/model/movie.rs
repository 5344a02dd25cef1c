use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Fixed enumeration of genres a movie may be tagged with.
///
/// Serialized using the display names (`"Sci-Fi"` rather than `"SciFi"`), which are also
/// the only accepted spellings on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Biography,
    Comedy,
    Crime,
    Drama,
    Fantasy,
    Horror,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
}

impl Genre {
    pub const ALL: [Genre; 12] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Biography,
        Genre::Comedy,
        Genre::Crime,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Biography => "Biography",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
        }
    }

    /// Case-insensitive comparison against a genre name, as used by list filtering.
    pub fn matches_name(&self, name: &str) -> bool {
        self.as_str().to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the enumerated genre names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    /// Exact, case-sensitive parse of a genre display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| UnknownGenre(s.to_string()))
    }
}

/// A movie record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieDto {
    /// Server-generated opaque identifier.
    pub id: String,
    pub title: String,
    pub year: i32,
    pub director: String,
    /// Running time in minutes.
    pub duration: u32,
    pub rating: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// Payload accepted by `POST /movies`. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMovieDto {
    pub title: String,
    #[schema(minimum = 1900, maximum = 2100)]
    pub year: i32,
    pub director: String,
    #[schema(minimum = 1)]
    pub duration: u32,
    #[schema(minimum = 0, maximum = 10)]
    pub rating: f64,
    /// Absolute URL of the poster image.
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// Payload accepted by `PATCH /movies/{id}`. Present fields replace the stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMovieDto {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub rating: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
}
