//! Short link entity representing a persisted code → URL mapping.

use chrono::{DateTime, Utc};

/// A persisted mapping from a short code to a long URL.
///
/// Records are immutable once created. `id` and `created_at` are assigned by
/// the store; `long_url` is kept exactly as it was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i64, code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code,
            long_url,
            created_at,
        }
    }
}

/// Input data for inserting a new short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub code: String,
    pub long_url: String,
}

impl NewShortLink {
    pub fn new(code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long_url: long_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_creation() {
        let now = Utc::now();
        let link = ShortLink::new(
            1,
            "Xk9pQ2w".to_string(),
            "https://example.com/a".to_string(),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "Xk9pQ2w");
        assert_eq!(link.long_url, "https://example.com/a");
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_short_link_keeps_url_verbatim() {
        let new_link = NewShortLink::new("abc12345", "https://Example.com:443/Path?q=1#frag");

        assert_eq!(new_link.code, "abc12345");
        assert_eq!(new_link.long_url, "https://Example.com:443/Path?q=1#frag");
    }
}
