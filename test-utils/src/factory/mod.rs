//! Factories for building request payloads in tests.
//!
//! Each factory starts from a payload that passes validation, so tests only spell out
//! the fields they care about.
//!
//! ```rust,ignore
//! use test_utils::factory::movie::MoviePayloadFactory;
//!
//! let payload = MoviePayloadFactory::new()
//!     .title("Heat")
//!     .genre(&["Crime", "Thriller"])
//!     .build();
//! ```

pub mod helpers;
pub mod movie;
