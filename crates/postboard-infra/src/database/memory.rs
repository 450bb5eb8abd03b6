//! In-memory post store - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::{NewPost, Pagination, Post, PostChanges, PostFilter, PostId};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository};

/// In-memory post store backed by an insertion-ordered `Vec`.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for InMemoryPostRepository {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn delete(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts.iter().position(|p| p.id == id);
        Ok(index.map(|index| posts.remove(index)))
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self, filter: &PostFilter, page: Pagination) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = page
            .limit()
            .map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX));

        Ok(posts
            .iter()
            .filter(|p| filter.matches(p.category.as_deref()))
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn create(&self, new: NewPost) -> Result<Post, RepoError> {
        let post = Post::from_new(PostId::generate(), new);
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn create_many(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, RepoError> {
        let created: Vec<Post> = posts
            .into_iter()
            .map(|new| Post::from_new(PostId::generate(), new))
            .collect();
        self.posts.write().await.extend(created.iter().cloned());
        Ok(created)
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        changes.apply_to(post);
        Ok(Some(post.clone()))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u64, limit: u64) -> Pagination {
        Pagination::new(page, limit).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(NewPost::new("T", "C")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_missing() {
        let repo = InMemoryPostRepository::new();
        assert_eq!(repo.find_by_id(PostId::generate()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_pages_in_insertion_order() {
        let repo = InMemoryPostRepository::new();
        let batch = (0..15)
            .map(|i| NewPost::new(format!("Post {i}"), "body"))
            .collect();
        let created = repo.create_many(batch).await.unwrap();
        assert_eq!(repo.len().await, 15);

        let first = repo.list(&PostFilter::default(), page(1, 10)).await.unwrap();
        let second = repo.list(&PostFilter::default(), page(2, 10)).await.unwrap();

        assert_eq!(first.len(), 10);
        assert_eq!(second.len(), 5);
        assert_eq!(first[0].id, created[0].id);
        assert_eq!(second[0].id, created[10].id);
    }

    #[tokio::test]
    async fn test_list_unbounded_limit() {
        let repo = InMemoryPostRepository::new();
        let batch = (0..12).map(|i| NewPost::new(format!("{i}"), "x")).collect();
        repo.create_many(batch).await.unwrap();

        let all = repo.list(&PostFilter::default(), page(1, 0)).await.unwrap();
        assert_eq!(all.len(), 12);
    }

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let repo = InMemoryPostRepository::new();
        repo.create(NewPost::new("a", "x").with_category("tech"))
            .await
            .unwrap();
        repo.create(NewPost::new("b", "x").with_category("Tech"))
            .await
            .unwrap();
        repo.create(NewPost::new("c", "x")).await.unwrap();

        let filter = PostFilter::by_category(Some("tech".to_string()));
        let posts = repo.list(&filter, Pagination::default()).await.unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "a");
    }

    #[tokio::test]
    async fn test_update_returns_new_value() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(NewPost::new("T", "C")).await.unwrap();

        let changes = PostChanges {
            title: Some("T2".to_string()),
            ..Default::default()
        };
        let updated = repo.update(created.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.title, "T2");
        assert_eq!(updated.content, "C");
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryPostRepository::new();
        let result = repo
            .update(PostId::generate(), PostChanges::default())
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_delete_returns_removed() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(NewPost::new("T", "C")).await.unwrap();

        assert_eq!(repo.delete(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(repo.delete(created.id).await.unwrap(), None);
        assert!(repo.is_empty().await);
    }
}
