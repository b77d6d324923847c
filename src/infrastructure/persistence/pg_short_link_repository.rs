//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::errors::StoreError;
use crate::domain::repositories::ShortLinkRepository;

const CODE_UNIQUE_CONSTRAINT: &str = "short_links_code_key";

/// PostgreSQL repository for short links.
///
/// Uniqueness of `code` is enforced by the `short_links_code_key` constraint,
/// so `insert_unique` is a single statement and needs no transaction. Every
/// query is bounded by `query_timeout`.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
    query_timeout: Duration,
}

#[derive(Debug, FromRow)]
struct ShortLinkRow {
    id: i64,
    code: String,
    long_url: String,
    created_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(row.id, row.code, row.long_url, row.created_at)
    }
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Runs `query` under the configured timeout.
    async fn bounded<T, F>(
        &self,
        operation: &'static str,
        query: F,
        map_err: impl FnOnce(sqlx::Error) -> StoreError,
    ) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(result) => result.map_err(map_err),
            Err(_) => Err(StoreError::Timeout(format!(
                "{operation} exceeded {}ms",
                self.query_timeout.as_millis()
            ))),
        }
    }
}

fn is_code_conflict(err: &sqlx::Error) -> bool {
    let Some(db_err) = err.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation() && matches!(db_err.constraint(), Some(CODE_UNIQUE_CONSTRAINT))
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StoreError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StoreError::InvalidData(message),
        _ => StoreError::Query(message),
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn insert_unique(&self, new_link: NewShortLink) -> Result<ShortLink, StoreError> {
        let code = new_link.code.clone();

        let row = self
            .bounded(
                "insert_unique",
                sqlx::query_as::<_, ShortLinkRow>(
                    r#"
                    INSERT INTO short_links (code, long_url)
                    VALUES ($1, $2)
                    RETURNING id, code, long_url, created_at
                    "#,
                )
                .bind(new_link.code)
                .bind(new_link.long_url)
                .fetch_one(self.pool.as_ref()),
                |err| {
                    if is_code_conflict(&err) {
                        StoreError::CodeConflict(code)
                    } else {
                        map_sqlx_error(err)
                    }
                },
            )
            .await?;

        Ok(row.into())
    }

    async fn lookup(&self, code: &str) -> Result<Option<ShortLink>, StoreError> {
        let row = self
            .bounded(
                "lookup",
                sqlx::query_as::<_, ShortLinkRow>(
                    r#"
                    SELECT id, code, long_url, created_at
                    FROM short_links
                    WHERE code = $1
                    "#,
                )
                .bind(code)
                .fetch_optional(self.pool.as_ref()),
                map_sqlx_error,
            )
            .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.bounded(
            "health_check",
            sqlx::query("SELECT 1").execute(self.pool.as_ref()),
            map_sqlx_error,
        )
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_map_to_availability() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolTimedOut),
            StoreError::Timeout(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::WorkerCrashed),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_decode_errors_map_to_invalid_data() {
        assert!(matches!(
            map_sqlx_error(sqlx::Error::RowNotFound),
            StoreError::InvalidData(_)
        ));
        assert!(matches!(
            map_sqlx_error(sqlx::Error::ColumnNotFound("code".to_string())),
            StoreError::InvalidData(_)
        ));
    }

    #[test]
    fn test_non_database_error_is_not_conflict() {
        assert!(!is_code_conflict(&sqlx::Error::PoolClosed));
    }
}
