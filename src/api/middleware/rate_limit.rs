//! Rate limiting middleware using token bucket algorithm.

use anyhow::Context;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Per-IP rate limiting middleware as installed on the router.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Token bucket parameters for one group of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Tokens replenished per second, at most 1000.
    pub per_second: u64,
    /// Bucket capacity.
    pub burst_size: u32,
}

impl RateLimit {
    pub fn new(per_second: u64, burst_size: u32) -> Self {
        Self {
            per_second,
            burst_size,
        }
    }

    /// Milliseconds between two replenished tokens.
    ///
    /// Rates above 1000 per second are capped at one token per millisecond.
    pub fn replenish_interval_ms(&self) -> u64 {
        (1000 / self.per_second.max(1)).max(1)
    }
}

/// Limits for the public lookup routes and the create route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimits {
    pub public: RateLimit,
    pub write: RateLimit,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            public: RateLimit::new(50, 200),
            write: RateLimit::new(2, 20),
        }
    }
}

/// Creates a per-IP rate limiter.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if either parameter is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/api/shorten", post(shorten_handler))
///     .layer(rate_limit::layer(RateLimit::new(2, 20))?);
/// ```
pub fn layer(limit: RateLimit) -> anyhow::Result<RateLimitLayer> {
    if limit.per_second == 0 {
        anyhow::bail!("Invalid rate limit {limit:?}");
    }

    // The builder takes the interval between tokens, not a rate.
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(limit.replenish_interval_ms())
        .burst_size(limit.burst_size)
        .finish()
        .with_context(|| format!("Invalid rate limit {limit:?}"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
