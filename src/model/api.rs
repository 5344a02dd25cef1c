use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error body returned for client and server errors.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Human-readable message body used for not-found responses and confirmations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A single rejected field in a request payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    /// Name of the offending field, or `body` when the payload itself is unusable.
    pub field: String,
    pub message: String,
}

/// Body of a 422 response, listing every violation found in the payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub error: Vec<FieldErrorDto>,
}
