//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /s/{code}`            - Short link redirect (public)
//! - `GET  /api/resolve/{code}`  - Lookup without redirect (public)
//! - `POST /api/shorten`         - Create a short link
//! - `GET  /health`              - Store health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket per route group; creation has a stricter limit

use crate::api;
use crate::api::handlers::{health_handler, missing_code_handler, redirect_handler};
use crate::api::middleware::rate_limit::{self, RateLimits};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limits` - per-IP limits; `None` disables rate limiting, which is
///   required when requests carry no peer address (as in tests)
///
/// Trailing-slash normalization is applied by [`crate::server`] around the
/// finished router.
///
/// # Errors
///
/// Returns an error if a rate limit is invalid.
pub fn app_router(state: AppState, rate_limits: Option<RateLimits>) -> anyhow::Result<Router> {
    let mut redirect_router = Router::new()
        .route("/s", get(missing_code_handler))
        .route("/s/{code}", get(redirect_handler));
    let mut lookup_router = api::routes::lookup_routes();
    let mut write_router = api::routes::write_routes();

    if let Some(limits) = rate_limits {
        redirect_router = redirect_router.layer(rate_limit::layer(limits.public)?);
        lookup_router = lookup_router.layer(rate_limit::layer(limits.public)?);
        write_router = write_router.layer(rate_limit::layer(limits.write)?);
    }

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(redirect_router)
        .nest("/api", lookup_router.merge(write_router))
        .with_state(state)
        .layer(tracing::layer());

    Ok(router)
}
