//! The posts view: a list plus a create/edit form.
//!
//! All state is local. Every mutation reloads the first page; a failed
//! reload is logged and leaves the list as it was.

use postboard_shared::dto::{CreatePostRequest, ListPostsQuery, PostResponse, UpdatePostRequest};

use crate::client::{ClientError, PostsClient};

/// Form fields of the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl PostForm {
    pub fn create_request(&self) -> CreatePostRequest {
        CreatePostRequest {
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
            category: non_empty(&self.category),
            ..Default::default()
        }
    }

    /// The form is sent whole; an empty category clears it.
    pub fn update_request(&self) -> UpdatePostRequest {
        UpdatePostRequest {
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
            category: Some(non_empty(&self.category)),
            ..Default::default()
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub struct PostsView {
    client: PostsClient,
    posts: Vec<PostResponse>,
    form: PostForm,
    editing: Option<String>,
}

impl PostsView {
    pub fn new(client: PostsClient) -> Self {
        Self {
            client,
            posts: Vec::new(),
            form: PostForm::default(),
            editing: None,
        }
    }

    pub fn posts(&self) -> &[PostResponse] {
        &self.posts
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PostForm {
        &mut self.form
    }

    /// Id of the post being edited, if any.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn client(&self) -> &PostsClient {
        &self.client
    }

    /// Fetch the first page of posts.
    pub async fn load(&mut self) {
        match self.client.list(&ListPostsQuery::default()).await {
            Ok(posts) => self.posts = posts,
            Err(e) => tracing::error!("Error fetching posts: {}", e),
        }
    }

    /// Put `post` into the form and switch to edit mode.
    pub fn edit(&mut self, post: &PostResponse) {
        self.form = PostForm {
            title: post.title.clone(),
            content: post.content.clone(),
            category: post.category.clone().unwrap_or_default(),
        };
        self.editing = Some(post.id.clone());
    }

    /// Update the edited post, or create a new one, then reset and reload.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        match &self.editing {
            Some(id) => {
                let updated = self.client.update(id, &self.form.update_request()).await?;
                tracing::debug!(post_id = %updated.id, "Post updated");
                self.editing = None;
            }
            None => {
                let created = self.client.create(&self.form.create_request()).await?;
                tracing::debug!(post_id = %created.id, "Post created");
            }
        }

        self.form = PostForm::default();
        self.load().await;
        Ok(())
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        self.client.delete(id).await?;
        self.load().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn post(id: &str, category: Option<&str>) -> PostResponse {
        PostResponse {
            id: id.to_string(),
            title: "Title".to_string(),
            content: "Body".to_string(),
            author: None,
            category: category.map(str::to_string),
            slug: None,
        }
    }

    fn unreachable_view() -> PostsView {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(500))
            .build()
            .unwrap();
        PostsView::new(PostsClient::with_client(http, "http://127.0.0.1:9"))
    }

    #[test]
    fn test_create_request_omits_empty_category() {
        let form = PostForm {
            title: "T".to_string(),
            content: "C".to_string(),
            category: String::new(),
        };
        let body = serde_json::to_value(form.create_request()).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "T", "content": "C" }));
    }

    #[test]
    fn test_update_request_clears_empty_category() {
        let form = PostForm {
            title: "T".to_string(),
            content: "C".to_string(),
            category: String::new(),
        };
        let body = serde_json::to_value(form.update_request()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "title": "T", "content": "C", "category": null })
        );
    }

    #[test]
    fn test_edit_fills_form() {
        let mut view = unreachable_view();
        view.edit(&post("abc", Some("tech")));

        assert_eq!(view.editing(), Some("abc"));
        assert_eq!(view.form().title, "Title");
        assert_eq!(view.form().category, "tech");
    }

    #[tokio::test]
    async fn test_failed_load_keeps_list() {
        let mut view = unreachable_view();
        view.posts = vec![post("abc", Some("tech"))];

        view.load().await;

        assert_eq!(view.posts(), &[post("abc", Some("tech"))]);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form() {
        let mut view = unreachable_view();
        view.edit(&post("abc", None));
        view.form_mut().title = "Changed".to_string();

        assert!(view.submit().await.is_err());
        assert_eq!(view.editing(), Some("abc"));
        assert_eq!(view.form().title, "Changed");
    }
}
