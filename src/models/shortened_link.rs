use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single successful shortening, shown in the session history.
/// Immutable once created; lives only as long as the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenedLink {
    /// Client-side identifier, unique per entry
    pub id: Uuid,
    /// The validated long URL as the user submitted it
    pub original_url: String,
    /// Short URL with the scheme prefix stripped for display
    pub short_url: String,
    /// Creation time; serializes as RFC 3339
    pub created_at: DateTime<Utc>,
}

impl ShortenedLink {
    /// Create a new history entry stamped with a fresh id and the current
    /// time. `short_url` is expected to be scheme-less already.
    pub fn new(original_url: impl Into<String>, short_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_url: original_url.into(),
            short_url: short_url.into(),
            created_at: Utc::now(),
        }
    }

    /// Protocol-relative anchor target so the browser re-adds the scheme.
    pub fn href(&self) -> String {
        format!("//{}", self.short_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_link_fields() {
        let link = ShortenedLink::new("https://example.com/very/long/path", "tinyurl.com/abc123");

        assert_eq!(link.original_url, "https://example.com/very/long/path");
        assert_eq!(link.short_url, "tinyurl.com/abc123");
    }

    #[test]
    fn test_ids_are_unique_per_entry() {
        let a = ShortenedLink::new("https://example.com/a", "tinyurl.com/a");
        let b = ShortenedLink::new("https://example.com/a", "tinyurl.com/a");

        // Same content, distinct entries
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_href_is_protocol_relative() {
        let link = ShortenedLink::new("https://example.com", "tinyurl.com/abc123");
        assert_eq!(link.href(), "//tinyurl.com/abc123");
    }

    #[test]
    fn test_serialization_round_trip() {
        let link = ShortenedLink::new("https://example.com/page", "tinyurl.com/xyz");

        let json = serde_json::to_string(&link).unwrap();
        assert!(json.contains("\"original_url\":\"https://example.com/page\""));
        assert!(json.contains("\"short_url\":\"tinyurl.com/xyz\""));

        let deserialized: ShortenedLink = serde_json::from_str(&json).unwrap();
        assert_eq!(link, deserialized);
    }

    #[test]
    fn test_created_at_serializes_as_rfc3339() {
        let link = ShortenedLink::new("https://example.com", "tinyurl.com/t");

        let json = serde_json::to_value(&link).unwrap();
        let created_at = json["created_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created_at).is_ok());
    }
}
