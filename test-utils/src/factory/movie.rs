//! Movie payload factory.

use serde_json::{json, Map, Value};

use crate::factory::helpers::next_id;

/// Factory for movie create/update payloads with customizable fields.
///
/// Defaults:
/// - title: `"Movie {n}"` where n is auto-incremented
/// - year: `2010`, director: `"C. Nolan"`, duration: `148`, rating: `8.8`
/// - poster: `"http://x/p.jpg"`, genre: `["Action", "Sci-Fi"]`
pub struct MoviePayloadFactory {
    fields: Map<String, Value>,
}

impl MoviePayloadFactory {
    /// Creates a factory pre-filled with a complete, valid payload.
    pub fn new() -> Self {
        let id = next_id();

        let mut fields = Map::new();
        fields.insert("title".to_string(), json!(format!("Movie {}", id)));
        fields.insert("year".to_string(), json!(2010));
        fields.insert("director".to_string(), json!("C. Nolan"));
        fields.insert("duration".to_string(), json!(148));
        fields.insert("rating".to_string(), json!(8.8));
        fields.insert("poster".to_string(), json!("http://x/p.jpg"));
        fields.insert("genre".to_string(), json!(["Action", "Sci-Fi"]));

        Self { fields }
    }

    /// The Inception example payload used throughout the API documentation.
    pub fn inception() -> Self {
        Self::new().title("Inception")
    }

    pub fn title(self, title: &str) -> Self {
        self.set("title", json!(title))
    }

    pub fn year(self, year: i64) -> Self {
        self.set("year", json!(year))
    }

    pub fn director(self, director: &str) -> Self {
        self.set("director", json!(director))
    }

    pub fn duration(self, duration: i64) -> Self {
        self.set("duration", json!(duration))
    }

    pub fn rating(self, rating: f64) -> Self {
        self.set("rating", json!(rating))
    }

    pub fn poster(self, poster: &str) -> Self {
        self.set("poster", json!(poster))
    }

    pub fn genre(self, genre: &[&str]) -> Self {
        self.set("genre", json!(genre))
    }

    /// Sets any field to an arbitrary JSON value, including malformed ones.
    pub fn set(mut self, field: &str, value: Value) -> Self {
        self.fields.insert(field.to_string(), value);
        self
    }

    /// Removes a field, e.g. to test required-field handling.
    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Default for MoviePayloadFactory {
    fn default() -> Self {
        Self::new()
    }
}
