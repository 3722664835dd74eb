//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A short code mapped to its destination.
///
/// Immutable after creation except for `clicks`, which only the redirect path
/// increments. `owner` is `None` for links created without a session.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub destination: String,
    pub clicks: i64,
    #[sqlx(rename = "owner_id")]
    pub owner: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        destination: String,
        clicks: i64,
        owner: Option<i64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            destination,
            clicks,
            owner,
            created_at,
        }
    }

    /// Returns true if `owner` created this link.
    pub fn is_owned_by(&self, owner: i64) -> bool {
        self.owner == Some(owner)
    }
}

/// Input data for creating a new link. Clicks always start at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLink {
    pub code: String,
    pub destination: String,
    pub owner: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "aB3xY9".to_string(),
            "https://example.com".to_string(),
            0,
            Some(7),
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "aB3xY9");
        assert_eq!(link.destination, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.created_at, now);
        assert!(link.is_owned_by(7));
        assert!(!link.is_owned_by(8));
    }

    #[test]
    fn test_anonymous_link_has_no_owner() {
        let link = Link::new(
            2,
            "zzzzzz".to_string(),
            "https://example.com".to_string(),
            3,
            None,
            Utc::now(),
        );

        assert!(link.owner.is_none());
        assert!(!link.is_owned_by(1));
    }

    #[test]
    fn test_link_serializes_owner() {
        let link = Link::new(
            3,
            "abc123".to_string(),
            "https://rust-lang.org".to_string(),
            0,
            Some(42),
            Utc::now(),
        );

        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["owner"], 42);
        assert_eq!(json["clicks"], 0);
    }
}
