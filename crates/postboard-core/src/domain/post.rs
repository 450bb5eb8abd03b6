use serde::{Deserialize, Serialize};

use super::id::{PostId, UserId};
use crate::error::DomainError;

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: Option<UserId>,
    pub category: Option<String>,
    pub slug: Option<String>,
}

impl Post {
    /// Materialize a new post under a store-assigned id.
    pub fn from_new(id: PostId, new: NewPost) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            author: new.author,
            category: new.category,
            slug: new.slug,
        }
    }
}

/// A post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: Option<UserId>,
    pub category: Option<String>,
    pub slug: Option<String>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_author(mut self, author: UserId) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Both `title` and `content` must be non-empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        if self.content.is_empty() {
            return Err(DomainError::Validation("content is required".to_string()));
        }
        Ok(())
    }
}

/// Partial update of a stored post.
///
/// `None` leaves a field untouched. For the optional fields the inner
/// option distinguishes clearing (`Some(None)`) from setting a value.
/// `title` and `content` can be replaced but never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Option<UserId>>,
    pub category: Option<Option<String>>,
    pub slug: Option<Option<String>>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.author.is_none()
            && self.category.is_none()
            && self.slug.is_none()
    }

    /// Apply the supplied fields to `post`.
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(slug) = self.slug {
            post.slug = slug;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(title: &str, content: &str) -> Post {
        Post::from_new(
            PostId::generate(),
            NewPost::new(title, content).with_category("general"),
        )
    }

    #[test]
    fn test_validate_requires_title_and_content() {
        assert!(NewPost::new("T", "C").validate().is_ok());
        assert!(NewPost::new("", "C").validate().is_err());
        assert!(NewPost::new("T", "").validate().is_err());
        assert!(NewPost::default().validate().is_err());
    }

    #[test]
    fn test_validate_accepts_whitespace() {
        assert!(NewPost::new(" ", " ").validate().is_ok());
    }

    #[test]
    fn test_apply_keeps_unsupplied_fields() {
        let mut post = stored("T", "C");
        let changes = PostChanges {
            title: Some("T2".to_string()),
            ..Default::default()
        };
        changes.apply_to(&mut post);

        assert_eq!(post.title, "T2");
        assert_eq!(post.content, "C");
        assert_eq!(post.category.as_deref(), Some("general"));
    }

    #[test]
    fn test_apply_clears_optional_fields() {
        let mut post = stored("T", "C");
        let changes = PostChanges {
            category: Some(None),
            slug: Some(Some("t".to_string())),
            ..Default::default()
        };
        changes.apply_to(&mut post);

        assert_eq!(post.category, None);
        assert_eq!(post.slug.as_deref(), Some("t"));
    }

    #[test]
    fn test_empty_changes() {
        assert!(PostChanges::default().is_empty());
        let changes = PostChanges {
            author: Some(None),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_serializes_id_as_string() {
        let post = stored("T", "C");
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], post.id.to_string());
    }
}
