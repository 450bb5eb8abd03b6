//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

use postboard_core::domain::{NewPost, Pagination, Post, PostChanges, PostFilter, PostId};
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, filter: &PostFilter, page: Pagination) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(
            category = ?filter.category,
            page = page.page(),
            limit = ?page.limit(),
            "Listing posts"
        );

        let mut query = PostEntity::find();
        if let Some(category) = &filter.category {
            query = query.filter(post::Column::Category.eq(category.as_str()));
        }
        let mut query = query
            .order_by_asc(post::Column::Id)
            .offset(page.offset());
        if let Some(limit) = page.limit() {
            query = query.limit(limit);
        }

        let result = query.all(&self.db).await.map_err(map_db_err)?;
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, new: NewPost) -> Result<Post, RepoError> {
        let active: post::ActiveModel = Post::from_new(PostId::generate(), new).into();
        let model = active.insert(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = %model.id, "Post inserted");
        Ok(model.into())
    }

    async fn create_many(&self, posts: Vec<NewPost>) -> Result<Vec<Post>, RepoError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let posts: Vec<Post> = posts
            .into_iter()
            .map(|new| Post::from_new(PostId::generate(), new))
            .collect();

        let inserted = PostEntity::insert_many(posts.iter().cloned().map(post::ActiveModel::from))
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = inserted, "Posts bulk inserted");
        Ok(posts)
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let Some(model) = PostEntity::find_by_id(id.as_uuid())
            .one(&txn)
            .await
            .map_err(map_db_err)?
        else {
            txn.commit().await.map_err(map_db_err)?;
            return Ok(None);
        };

        if changes.is_empty() {
            txn.commit().await.map_err(map_db_err)?;
            return Ok(Some(model.into()));
        }

        let mut active: post::ActiveModel = model.into();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }
        if let Some(author) = changes.author {
            active.author = Set(author.map(Into::into));
        }
        if let Some(category) = changes.category {
            active.category = Set(category);
        }
        if let Some(slug) = changes.slug {
            active.slug = Set(slug);
        }

        let updated = active.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(Some(updated.into()))
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
