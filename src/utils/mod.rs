//! Helpers used by the application services.
//!
//! - [`code_generator`] - Random and digest-based short code generators
//! - [`url_validator`] - Long URL validation

pub mod code_generator;
pub mod url_validator;
