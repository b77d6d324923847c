//! Short link repository implementations.
//!
//! # Repositories
//!
//! - [`PgShortLinkRepository`] - Durable storage in PostgreSQL via SQLx
//! - [`InMemoryShortLinkRepository`] - Sharded concurrent map, for tests and development

pub mod memory_short_link_repository;
pub mod pg_short_link_repository;

pub use memory_short_link_repository::InMemoryShortLinkRepository;
pub use pg_short_link_repository::PgShortLinkRepository;
