//! HTTP request handlers.
//!
//! Controllers extract request data, run payload validation, call into the service layer
//! and convert domain models to DTOs for the response.

pub mod index;
pub mod movie;
pub mod payment;

#[cfg(test)]
mod test;
