//! Request payload validation.
//!
//! Validators turn untrusted JSON bodies into the parameter types consumed by the
//! service layer, or a `ValidationError` describing every rejected field.

pub mod movie;
