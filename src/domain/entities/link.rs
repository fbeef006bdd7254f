//! Link entity representing a short code mapping.

use chrono::{DateTime, Utc};

/// A short code mapped to its target URL.
///
/// `code` and `target_url` never change after creation. `total_clicks` moves only
/// through redirects, `creation_count` only through repeated create requests for
/// the same URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub creation_count: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a fresh, never-clicked link.
    pub fn new(code: String, target_url: String, now: DateTime<Utc>) -> Self {
        Self {
            code,
            target_url,
            total_clicks: 0,
            creation_count: 1,
            last_clicked: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies one redirect traversal.
    pub fn register_click(&mut self, at: DateTime<Utc>) {
        self.total_clicks += 1;
        self.last_clicked = Some(at);
        self.updated_at = at;
    }

    /// Applies one repeated create request for the same target URL.
    pub fn bump_creation_count(&mut self, at: DateTime<Utc>) {
        self.creation_count += 1;
        self.updated_at = at;
    }

    /// Whether the link was ever followed.
    pub fn was_clicked(&self) -> bool {
        self.last_clicked.is_some()
    }
}

/// Input data for inserting a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}

impl NewLink {
    pub fn new(code: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target_url: target_url.into(),
        }
    }
}

/// Result tag of a create call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new link was inserted.
    Created,
    /// An existing link for the same URL had its `creation_count` bumped.
    Incremented,
}

impl CreateOutcome {
    pub fn is_created(self) -> bool {
        matches!(self, Self::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new("abc123".to_string(), "https://example.com".to_string(), now);

        assert_eq!(link.code, "abc123");
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.total_clicks, 0);
        assert_eq!(link.creation_count, 1);
        assert!(!link.was_clicked());
        assert_eq!(link.created_at, now);
        assert_eq!(link.updated_at, now);
    }

    #[test]
    fn test_register_click() {
        let created = Utc::now();
        let mut link = Link::new("abc123".to_string(), "https://example.com".to_string(), created);

        let first = created + Duration::seconds(1);
        let second = created + Duration::seconds(2);
        link.register_click(first);
        link.register_click(second);

        assert_eq!(link.total_clicks, 2);
        assert_eq!(link.last_clicked, Some(second));
        assert_eq!(link.updated_at, second);
        assert_eq!(link.created_at, created);
        assert_eq!(link.creation_count, 1);
    }

    #[test]
    fn test_bump_creation_count_leaves_clicks_alone() {
        let created = Utc::now();
        let mut link = Link::new("abc123".to_string(), "https://example.com".to_string(), created);

        let later = created + Duration::seconds(5);
        link.bump_creation_count(later);

        assert_eq!(link.creation_count, 2);
        assert_eq!(link.updated_at, later);
        assert_eq!(link.total_clicks, 0);
        assert!(link.last_clicked.is_none());
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink::new("xyz789", "https://rust-lang.org");

        assert_eq!(new_link.code, "xyz789");
        assert_eq!(new_link.target_url, "https://rust-lang.org");
    }

    #[test]
    fn test_create_outcome() {
        assert!(CreateOutcome::Created.is_created());
        assert!(!CreateOutcome::Incremented.is_created());
    }
}
