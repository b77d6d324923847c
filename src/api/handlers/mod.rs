//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod resolve;
pub mod shorten;

pub use health::health_handler;
pub use redirect::{missing_code_handler, redirect_handler};
pub use resolve::resolve_handler;
pub use shorten::shorten_handler;
