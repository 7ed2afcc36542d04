//! Site metadata projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{int_field, str_field};

/// Flattened snapshot of the forum's `site.json` metadata.
///
/// Re-fetched on every run and never merged with prior state. All source
/// fields are optional; `updated_at` is stamped locally at projection time
/// and is the only place wall-clock time enters the data model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteSummary {
    /// Site title
    pub title: Option<String>,

    /// Site description
    pub description: Option<String>,

    /// Total topic count
    pub topics_count: Option<i64>,

    /// Total post count
    pub posts_count: Option<i64>,

    /// Total user count
    pub users_count: Option<i64>,

    /// Total category count
    pub categories_count: Option<i64>,

    /// Site creation timestamp, as reported by the service
    pub created_at: Option<String>,

    /// Local timestamp of this projection
    pub updated_at: DateTime<Utc>,
}

impl SiteSummary {
    /// Project the raw `site.json` body, defaulting missing fields to `None`.
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            title: str_field(raw, "title"),
            description: str_field(raw, "description"),
            topics_count: int_field(raw, "topics_count"),
            posts_count: int_field(raw, "posts_count"),
            users_count: int_field(raw, "users_count"),
            categories_count: int_field(raw, "categories_count"),
            created_at: str_field(raw, "created_at"),
            updated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projects_all_fields() {
        let raw = json!({
            "title": "linux.do",
            "description": "A Discourse forum",
            "topics_count": 42,
            "posts_count": 100,
            "users_count": 7,
            "categories_count": 3,
            "created_at": "2023-01-01T00:00:00.000Z",
        });

        let summary = SiteSummary::from_raw(&raw);
        assert_eq!(summary.title.as_deref(), Some("linux.do"));
        assert_eq!(summary.topics_count, Some(42));
        assert_eq!(summary.posts_count, Some(100));
        assert_eq!(summary.users_count, Some(7));
        assert_eq!(summary.categories_count, Some(3));
        assert_eq!(summary.created_at.as_deref(), Some("2023-01-01T00:00:00.000Z"));
    }

    #[test]
    fn empty_body_projects_to_none_with_fresh_timestamp() {
        let before = Utc::now();
        let summary = SiteSummary::from_raw(&json!({}));
        let after = Utc::now();

        assert_eq!(summary.title, None);
        assert_eq!(summary.description, None);
        assert_eq!(summary.topics_count, None);
        assert_eq!(summary.posts_count, None);
        assert_eq!(summary.users_count, None);
        assert_eq!(summary.categories_count, None);
        assert_eq!(summary.created_at, None);
        assert!(summary.updated_at >= before && summary.updated_at <= after);
    }

    #[test]
    fn mistyped_fields_project_to_none() {
        let raw = json!({
            "title": 123,
            "topics_count": "forty-two",
        });

        let summary = SiteSummary::from_raw(&raw);
        assert_eq!(summary.title, None);
        assert_eq!(summary.topics_count, None);
    }

    #[test]
    fn serializes_every_key_even_when_none() {
        let summary = SiteSummary::from_raw(&json!({}));
        let value = serde_json::to_value(&summary).unwrap();
        let map = value.as_object().unwrap();

        for key in [
            "title",
            "description",
            "topics_count",
            "posts_count",
            "users_count",
            "categories_count",
            "created_at",
            "updated_at",
        ] {
            assert!(map.contains_key(key), "missing key {key}");
        }
        assert!(map["title"].is_null());
        assert!(map["updated_at"].is_string());
    }
}
