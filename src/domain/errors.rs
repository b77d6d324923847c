//! Error taxonomy shared by the store, the code generators and the services.
//!
//! These errors never reach HTTP clients directly; the API layer converts
//! them into [`crate::error::AppError`].

use thiserror::Error;

/// Errors reported by a [`crate::domain::repositories::ShortLinkRepository`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The code is already taken. Expected under collisions and recovered by
    /// the shortening retry loop.
    #[error("short code already exists: {0}")]
    CodeConflict(String),
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

impl StoreError {
    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CodeConflict(_) => "code_conflict",
            Self::Unavailable(_) => "unavailable",
            Self::Timeout(_) => "timeout",
            Self::Query(_) => "query",
            Self::InvalidData(_) => "invalid_data",
        }
    }
}

/// Errors reported by a [`crate::domain::code_generator::CodeGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("invalid generator input: {0}")]
    InvalidInput(String),
}

/// Errors returned by [`crate::application::services::ShortenService::shorten`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    #[error("invalid long URL: {0}")]
    InvalidInput(String),

    /// Every attempt collided. Points at a code space that is too small for
    /// the stored volume, or at a broken entropy source.
    #[error("no unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    #[error("store unavailable: {0}")]
    StoreUnavailable(StoreError),
}

impl From<GeneratorError> for ShortenError {
    fn from(value: GeneratorError) -> Self {
        match value {
            GeneratorError::InvalidInput(message) => Self::InvalidInput(message),
        }
    }
}

/// Errors returned by [`crate::application::services::RedirectResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("invalid short code: {0}")]
    InvalidCode(String),
    #[error("short link not found: {0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(StoreError),
}

impl ResolveError {
    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCode(_) => "invalid_code",
            Self::NotFound(_) => "not_found",
            Self::StoreUnavailable(_) => "store_unavailable",
        }
    }
}
