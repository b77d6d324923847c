//! Repository trait for short link persistence.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// Durable mapping from short code to [`ShortLink`].
///
/// The store owns every persisted record and is the only place where
/// uniqueness of `code` is enforced. Callers hold no locks; two concurrent
/// inserts of the same code must resolve to exactly one success.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryShortLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Atomically inserts a new link if its code is not taken yet.
    ///
    /// Returns the stored record with its store-assigned `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CodeConflict`] if the code already exists. Any
    /// other variant means the store could not be reached or answered badly.
    async fn insert_unique(&self, new_link: NewShortLink) -> Result<ShortLink, StoreError>;

    /// Point lookup by code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// A concurrent insert of the same code is observed either completely or
    /// not at all.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store could not answer.
    async fn lookup(&self, code: &str) -> Result<Option<ShortLink>, StoreError>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
