//! Business logic layer.
//!
//! Services sit between controllers and the data layer. They decide which outcomes are
//! errors (for example an unmatched genre filter) and log state changes.

pub mod movie;
pub mod payment;
