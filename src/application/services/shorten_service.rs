//! Short link creation service.

use std::sync::Arc;

use crate::domain::code_generator::CodeGenerator;
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::errors::{ShortenError, StoreError};
use crate::domain::repositories::ShortLinkRepository;
use crate::utils::url_validator::validate_long_url;

/// Default number of candidate codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Creates short links, retrying on code collisions.
///
/// The service holds no lock. Uniqueness is delegated entirely to
/// [`ShortLinkRepository::insert_unique`]: a candidate that loses a race is
/// reported as [`StoreError::CodeConflict`] and the next attempt draws a new
/// candidate.
///
/// Duplicate long URLs are not deduplicated; each call creates a new record.
pub struct ShortenService<R: ShortLinkRepository + ?Sized, G: CodeGenerator + ?Sized> {
    repository: Arc<R>,
    generator: Arc<G>,
    max_attempts: u32,
}

impl<R: ShortLinkRepository + ?Sized, G: CodeGenerator + ?Sized> ShortenService<R, G> {
    /// Creates a new shorten service.
    ///
    /// `max_attempts` is clamped to at least 1.
    pub fn new(repository: Arc<R>, generator: Arc<G>, max_attempts: u32) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Validates `long_url` and persists it under a fresh unique code.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::InvalidInput`] if the URL fails validation
    /// - [`ShortenError::GenerationExhausted`] if every attempt collided
    /// - [`ShortenError::StoreUnavailable`] on any other store failure
    pub async fn shorten(&self, long_url: &str) -> Result<ShortLink, ShortenError> {
        validate_long_url(long_url).map_err(|e| ShortenError::InvalidInput(e.to_string()))?;

        for attempt in 0..self.max_attempts {
            let code = self.generator.generate(long_url, attempt)?;

            match self
                .repository
                .insert_unique(NewShortLink::new(code, long_url))
                .await
            {
                Ok(link) => {
                    metrics::counter!("snaplink_links_created_total").increment(1);
                    tracing::info!(
                        id = link.id,
                        code = %link.code,
                        attempts = attempt + 1,
                        "Short link created"
                    );
                    return Ok(link);
                }
                Err(StoreError::CodeConflict(code)) => {
                    metrics::counter!("snaplink_code_collisions_total").increment(1);
                    tracing::warn!(%code, attempt, "Short code collision, retrying");
                }
                Err(e) => {
                    tracing::error!(error = %e, kind = e.kind(), "Failed to insert short link");
                    return Err(ShortenError::StoreUnavailable(e));
                }
            }
        }

        metrics::counter!("snaplink_generation_exhausted_total").increment(1);
        tracing::error!(
            attempts = self.max_attempts,
            "Short code generation exhausted; code space may be too small"
        );

        Err(ShortenError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}
