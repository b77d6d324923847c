//! In-memory implementation of the short link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::errors::StoreError;
use crate::domain::repositories::ShortLinkRepository;

/// Process-local short link store backed by a [`DashMap`].
///
/// The check-and-insert runs under the shard lock of the entry API, so two
/// concurrent inserts of one code yield exactly one success. Ids come from
/// an atomic counter and are only drawn for successful inserts.
///
/// Contents are lost on restart; use it for tests and single-node
/// development.
#[derive(Debug)]
pub struct InMemoryShortLinkRepository {
    storage: DashMap<String, ShortLink>,
    next_id: AtomicI64,
}

impl InMemoryShortLinkRepository {
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryShortLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShortLinkRepository for InMemoryShortLinkRepository {
    async fn insert_unique(&self, new_link: NewShortLink) -> Result<ShortLink, StoreError> {
        match self.storage.entry(new_link.code) {
            Entry::Occupied(occupied) => Err(StoreError::CodeConflict(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                let link = ShortLink::new(
                    self.next_id.fetch_add(1, Ordering::Relaxed),
                    vacant.key().clone(),
                    new_link.long_url,
                    Utc::now(),
                );
                vacant.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn lookup(&self, code: &str) -> Result<Option<ShortLink>, StoreError> {
        Ok(self.storage.get(code).map(|entry| entry.value().clone()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
