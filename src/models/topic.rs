//! Topic projection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{bool_field, int_field, str_field, uint_field};

/// Fixed 13-field projection of a raw topic mapping.
///
/// The remote service is the source of truth; this is a one-way projection
/// overwritten on every run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicSummary {
    /// Topic identifier
    pub id: Option<u64>,

    /// Topic title
    pub title: Option<String>,

    /// URL slug
    pub slug: Option<String>,

    /// Number of posts in the topic
    pub posts_count: Option<i64>,

    /// Number of replies
    pub reply_count: Option<i64>,

    /// View count
    pub views: Option<i64>,

    /// Like count
    pub like_count: Option<i64>,

    /// Creation timestamp, as reported by the service
    pub created_at: Option<String>,

    /// Timestamp of the last post
    pub last_posted_at: Option<String>,

    /// Whether the topic is visible
    pub visible: Option<bool>,

    /// Whether the topic is closed
    pub closed: Option<bool>,

    /// Whether the topic is archived
    pub archived: Option<bool>,

    /// Identifier of the owning category
    pub category_id: Option<i64>,
}

impl TopicSummary {
    /// Project a raw topic mapping, defaulting missing fields to `None`.
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            id: uint_field(raw, "id"),
            title: str_field(raw, "title"),
            slug: str_field(raw, "slug"),
            posts_count: int_field(raw, "posts_count"),
            reply_count: int_field(raw, "reply_count"),
            views: int_field(raw, "views"),
            like_count: int_field(raw, "like_count"),
            created_at: str_field(raw, "created_at"),
            last_posted_at: str_field(raw, "last_posted_at"),
            visible: bool_field(raw, "visible"),
            closed: bool_field(raw, "closed"),
            archived: bool_field(raw, "archived"),
            category_id: int_field(raw, "category_id"),
        }
    }
}

/// Project a sequence of raw topics, preserving input order.
pub fn project_topics(raw: &[Value]) -> Vec<TopicSummary> {
    raw.iter().map(TopicSummary::from_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projects_full_topic() {
        let raw = json!({
            "id": 101,
            "title": "Kernel upgrade notes",
            "slug": "kernel-upgrade-notes",
            "posts_count": 12,
            "reply_count": 11,
            "views": 345,
            "like_count": 9,
            "created_at": "2024-05-01T08:00:00.000Z",
            "last_posted_at": "2024-05-02T09:30:00.000Z",
            "visible": true,
            "closed": false,
            "archived": false,
            "category_id": 4,
        });

        let topic = TopicSummary::from_raw(&raw);
        assert_eq!(topic.id, Some(101));
        assert_eq!(topic.title.as_deref(), Some("Kernel upgrade notes"));
        assert_eq!(topic.slug.as_deref(), Some("kernel-upgrade-notes"));
        assert_eq!(topic.posts_count, Some(12));
        assert_eq!(topic.views, Some(345));
        assert_eq!(topic.visible, Some(true));
        assert_eq!(topic.closed, Some(false));
        assert_eq!(topic.category_id, Some(4));
    }

    #[test]
    fn missing_fields_default_to_none_and_all_keys_serialize() {
        let raw = json!({ "id": 7, "title": "Sparse" });
        let topics = project_topics(&[raw]);

        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].id, Some(7));
        assert_eq!(topics[0].slug, None);
        assert_eq!(topics[0].views, None);
        assert_eq!(topics[0].archived, None);

        let value = serde_json::to_value(&topics[0]).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 13);
        for key in [
            "id",
            "title",
            "slug",
            "posts_count",
            "reply_count",
            "views",
            "like_count",
            "created_at",
            "last_posted_at",
            "visible",
            "closed",
            "archived",
            "category_id",
        ] {
            assert!(map.contains_key(key), "missing key {key}");
        }
    }

    #[test]
    fn preserves_order_and_handles_empty_input() {
        assert!(project_topics(&[]).is_empty());

        let raw = vec![json!({ "id": 2 }), json!({ "id": 1 }), json!({ "id": 3 })];
        let ids: Vec<_> = project_topics(&raw).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![Some(2), Some(1), Some(3)]);
    }

    #[test]
    fn non_object_input_projects_to_all_none() {
        let topic = TopicSummary::from_raw(&json!("not an object"));
        assert_eq!(topic.id, None);
        assert_eq!(topic.title, None);
    }
}
