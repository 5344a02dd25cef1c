//! In-memory data layer.
//!
//! This module holds the process-lifetime movie collection. There is no persistence:
//! the store is seeded at startup and everything is discarded when the process exits.

pub mod movie;

#[cfg(test)]
mod test;
