//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are built from validated
//! payloads (or seed data) and transformed to DTOs at the controller boundary.

pub mod movie;
