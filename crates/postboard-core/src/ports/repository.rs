use async_trait::async_trait;

use crate::domain::{NewPost, Pagination, Post, PostChanges, PostFilter, PostId};
use crate::error::RepoError;

/// Generic repository trait for single-document lookups and removal.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID, returning it if it existed.
    async fn delete(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// Post store.
///
/// Every method is a single atomic operation on one document, except
/// `create_many` which is one bulk statement.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, PostId> {
    /// List posts in store order, filtered and paginated.
    async fn list(&self, filter: &PostFilter, page: Pagination) -> Result<Vec<Post>, RepoError>;

    /// Insert a post; the store assigns its id.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Bulk insert, preserving input order.
    async fn create_many(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, RepoError>;

    /// Apply `changes` and return the post-update record, `None` if absent.
    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError>;

    /// Short name of the backing store, reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
