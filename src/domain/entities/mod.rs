//! Core domain entities.
//!
//! The service has a single persisted entity, [`ShortLink`]. [`NewShortLink`]
//! carries the caller-supplied half of a record into the store, which assigns
//! the `id` and `created_at` fields.

pub mod short_link;

pub use short_link::{NewShortLink, ShortLink};
