//! API route configuration.
//!
//! Routes are split by rate limit class: lookups are cheap and public,
//! creation writes to the store and is limited more strictly.

use crate::api::handlers::{resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only API routes.
///
/// # Endpoints
///
/// - `GET  /resolve/{code}` - Resolve a short code to its long URL
pub fn lookup_routes() -> Router<AppState> {
    Router::new().route("/resolve/{code}", get(resolve_handler))
}

/// Routes that create short links.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link
pub fn write_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
