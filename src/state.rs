//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::shorten_service::DEFAULT_MAX_ATTEMPTS;
use crate::application::services::{RedirectResolver, ShortenService};
use crate::domain::alphabet::Alphabet;
use crate::domain::code_generator::CodeGenerator;
use crate::domain::repositories::ShortLinkRepository;

/// Settings consumed by the services and handlers.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Prefix of rendered short URLs; a trailing `/` is ignored.
    pub base_url: String,
    pub max_attempts: u32,
    /// Alphabet that resolvable codes must belong to.
    pub alphabet: Alphabet,
    /// `max-age` of successful redirect responses, in seconds.
    pub redirect_cache_max_age: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            alphabet: Alphabet::Base62,
            redirect_cache_max_age: 86_400,
        }
    }
}

/// Application state cloned into every request.
///
/// Holds trait objects so the store and generator are chosen at startup.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<dyn ShortLinkRepository, dyn CodeGenerator>>,
    pub redirect_resolver: Arc<RedirectResolver<dyn ShortLinkRepository>>,
    pub repository: Arc<dyn ShortLinkRepository>,
    pub base_url: String,
    pub redirect_cache_max_age: u64,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn ShortLinkRepository>,
        generator: Arc<dyn CodeGenerator>,
        settings: AppSettings,
    ) -> Self {
        let shorten_service = Arc::new(ShortenService::new(
            repository.clone(),
            generator,
            settings.max_attempts,
        ));
        let redirect_resolver = Arc::new(RedirectResolver::new(
            repository.clone(),
            settings.alphabet,
        ));

        Self {
            shorten_service,
            redirect_resolver,
            repository,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            redirect_cache_max_age: settings.redirect_cache_max_age,
        }
    }

    /// Renders the public short URL for `code` as `{base_url}/s/{code}`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/s/{}", self.base_url, code)
    }
}
