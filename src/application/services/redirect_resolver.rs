//! Resolution of short codes on the public redirect path.

use std::sync::Arc;

use crate::domain::alphabet::Alphabet;
use crate::domain::errors::ResolveError;
use crate::domain::repositories::ShortLinkRepository;

/// Resolves short codes to their long URLs.
///
/// Codes are checked against the configured [`Alphabet`] before the store is
/// touched, so malformed input from public traffic never costs a query.
/// Resolution has no side effects apart from logging and counters.
pub struct RedirectResolver<R: ShortLinkRepository + ?Sized> {
    repository: Arc<R>,
    alphabet: Alphabet,
}

impl<R: ShortLinkRepository + ?Sized> RedirectResolver<R> {
    pub fn new(repository: Arc<R>, alphabet: Alphabet) -> Self {
        Self {
            repository,
            alphabet,
        }
    }

    /// Returns the long URL stored under `code`, unchanged.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidCode`] for empty codes or foreign characters
    /// - [`ResolveError::NotFound`] if no record exists
    /// - [`ResolveError::StoreUnavailable`] if the store could not answer
    pub async fn resolve(&self, code: &str) -> Result<String, ResolveError> {
        let result = self.lookup(code).await;
        let outcome = match &result {
            Ok(_) => "hit",
            Err(e) => e.kind(),
        };
        metrics::counter!("snaplink_resolutions_total", "outcome" => outcome).increment(1);
        result
    }

    async fn lookup(&self, code: &str) -> Result<String, ResolveError> {
        if let Err(reason) = self.alphabet.validate(code) {
            tracing::info!(code, %reason, "Rejected malformed short code");
            return Err(ResolveError::InvalidCode(code.to_string()));
        }

        match self.repository.lookup(code).await {
            Ok(Some(link)) => {
                tracing::debug!(code, id = link.id, "Short code resolved");
                Ok(link.long_url)
            }
            Ok(None) => {
                tracing::debug!(code, "Short code not found");
                Err(ResolveError::NotFound(code.to_string()))
            }
            Err(e) => {
                tracing::error!(code, error = %e, kind = e.kind(), "Failed to look up short code");
                Err(ResolveError::StoreUnavailable(e))
            }
        }
    }
}
