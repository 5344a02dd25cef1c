//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - The in-memory movie store
//! - The CORS origin allow-list

use crate::server::{data::movie::MovieStore, middleware::cors::CorsPolicy};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `MovieStore` and `CorsPolicy` are reference-counted
/// handles, so every clone observes the same movie collection.
#[derive(Clone)]
pub struct AppState {
    /// Process-lifetime movie collection.
    pub movies: MovieStore,

    /// Origins permitted to read `GET /movies` and preflight per-resource routes.
    pub cors: CorsPolicy,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `movies` - Movie store, typically seeded at startup
    /// - `cors` - CORS allow-list policy
    pub fn new(movies: MovieStore, cors: CorsPolicy) -> Self {
        Self { movies, cors }
    }
}
