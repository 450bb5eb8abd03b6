//! Data Transfer Objects - request/response types for the posts API.

use serde::{Deserialize, Deserializer, Serialize};

/// Query string of `GET /api/posts`.
///
/// Values stay textual; the server decides what a malformed number means.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
}

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Body of `PUT /api/posts/{id}`.
///
/// Absent fields are left untouched. `null` clears `author`, `category`
/// and `slug`; for `title` and `content` it is the same as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub slug: Option<Option<String>>,
}

/// Marks a field as present, so an explicit `null` becomes `Some(None)`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A stored post as returned by every read or write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_distinguishes_null_from_absent() {
        let req: UpdatePostRequest =
            serde_json::from_value(json!({ "title": "T2", "category": null })).unwrap();

        assert_eq!(req.title.as_deref(), Some("T2"));
        assert_eq!(req.content, None);
        assert_eq!(req.category, Some(None));
        assert_eq!(req.slug, None);
    }

    #[test]
    fn test_update_ignores_unknown_fields() {
        let req: UpdatePostRequest =
            serde_json::from_value(json!({ "id": "x", "views": 3 })).unwrap();
        assert!(req.title.is_none() && req.author.is_none());
    }

    #[test]
    fn test_update_serializes_clear_as_null() {
        let req = UpdatePostRequest {
            slug: Some(None),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "slug": null }));
    }

    #[test]
    fn test_create_tolerates_missing_fields() {
        let req: CreatePostRequest =
            serde_json::from_value(json!({ "content": "Missing title" })).unwrap();
        assert!(req.title.is_none());
        assert_eq!(req.content.as_deref(), Some("Missing title"));
    }
}
