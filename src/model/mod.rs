//! Wire-level data transfer objects.
//!
//! These types describe the JSON bodies exchanged over HTTP. Server-side domain models
//! live in `server::model` and are converted to these DTOs at the controller boundary.

pub mod api;
pub mod movie;
