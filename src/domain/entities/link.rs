//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short code and its destination URL.
///
/// `original_url` is immutable after creation; `click_count` starts at zero
/// and only ever grows.
#[derive(Debug, Clone)]
pub struct Link {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            short_code,
            original_url,
            created_at,
            click_count,
        }
    }
}

/// Input data for creating a new link.
///
/// The click counter is not part of the input; storage initializes it to zero.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com/".to_string(),
            now,
            0,
        );

        assert_eq!(link.short_code, "abc123");
        assert_eq!(link.original_url, "https://example.com/");
        assert_eq!(link.created_at, now);
        assert_eq!(link.click_count, 0);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            short_code: "xyz789".to_string(),
            original_url: "https://rust-lang.org/".to_string(),
        };

        assert_eq!(new_link.short_code, "xyz789");
        assert_eq!(new_link.original_url, "https://rust-lang.org/");
    }
}
