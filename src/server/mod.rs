//! Server-side API backend and business logic.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Validation** (`validation/`) - Turns untrusted JSON payloads into parameter types
//! - **Service Layer** (`service/`) - Business rules such as not-found policy
//! - **Data Layer** (`data/`) - The in-memory movie store
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - CORS origin allow-list
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (movie store, CORS policy)
//! - **Startup** (`startup`) - Tracing, seed data, listener and graceful shutdown
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** extracts the body and runs **Validation** for mutating routes
//! 3. **Service** applies business rules and calls the **Data** layer
//! 4. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
