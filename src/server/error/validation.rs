use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{FieldErrorDto, ValidationErrorDto};

/// One rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Payload failed validation. Carries every violation, not just the first one found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Payload failed validation: {}", summarize(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Returns the issue recorded for `field`, if any.
    #[cfg(test)]
    pub fn issue_for(&self, field: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Converts validation failures into a 422 Unprocessable Entity response.
///
/// Logged at debug level only; a rejected payload is a client mistake, not a server fault.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let body = ValidationErrorDto {
            error: self
                .issues
                .into_iter()
                .map(|issue| FieldErrorDto {
                    field: issue.field,
                    message: issue.message,
                })
                .collect(),
        };

        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}
