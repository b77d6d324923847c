//! Application layer services implementing business logic.
//!
//! Services consume the repository and generator traits from
//! [`crate::domain`] and return domain errors; the HTTP handlers translate
//! those into responses.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short link creation with collision retry
//! - [`services::redirect_resolver::RedirectResolver`] - Code to long URL resolution

pub mod services;
