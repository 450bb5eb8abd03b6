//! Posts resource handlers.
//!
//! Identifiers are parsed before any store call, so a malformed id is a
//! 400 and a well-formed id that matches nothing is a 404.

use actix_web::{HttpResponse, web};

use postboard_core::domain::{NewPost, Pagination, Post, PostChanges, PostFilter, PostId, UserId};
use postboard_core::error::DomainError;
use postboard_shared::MessageResponse;
use postboard_shared::dto::{CreatePostRequest, ListPostsQuery, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts?category=&page=&limit=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let page = Pagination::parse(query.page.as_deref(), query.limit.as_deref())
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let filter = PostFilter::by_category(query.category);

    let posts = state
        .posts
        .list(&filter, page)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::debug!(count = posts.len(), "Listed posts");
    Ok(HttpResponse::Ok().json(posts.into_iter().map(post_response).collect::<Vec<_>>()))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state.posts.find_by_id(id).await.map_err(|e| {
        tracing::warn!(post_id = %id, error = %e, "Post lookup failed");
        AppError::InvalidId
    })?;

    let post = post.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut new = NewPost::new(
        req.title.unwrap_or_default(),
        req.content.unwrap_or_default(),
    );
    new.validate().map_err(|e| {
        tracing::debug!(error = %e, "Rejected new post");
        AppError::ValidationFailed
    })?;

    new.author = parse_author(req.author.as_deref()).map_err(|_| AppError::InvalidData)?;
    new.category = req.category;
    new.slug = req.slug;

    let post = state.posts.create(new).await.map_err(|e| {
        tracing::warn!(error = %e, "Post insert failed");
        AppError::InvalidData
    })?;

    tracing::info!(post_id = %post.id, "Post created");
    Ok(HttpResponse::Created().json(post_response(post)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let changes = post_changes(body.into_inner()).map_err(|_| AppError::InvalidId)?;

    let post = state.posts.update(id, changes).await.map_err(|e| {
        tracing::warn!(post_id = %id, error = %e, "Post update failed");
        AppError::InvalidId
    })?;

    let post = post.ok_or(AppError::NotFound)?;
    tracing::info!(post_id = %post.id, "Post updated");
    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let deleted = state.posts.delete(id).await.map_err(|e| {
        tracing::warn!(post_id = %id, error = %e, "Post delete failed");
        AppError::InvalidId
    })?;

    deleted.ok_or(AppError::NotFound)?;
    tracing::info!(post_id = %id, "Post deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::deleted()))
}

fn parse_id(raw: &str) -> AppResult<PostId> {
    PostId::parse(raw).map_err(|_| AppError::InvalidId)
}

// An empty author string counts as no author.
fn parse_author(raw: Option<&str>) -> Result<Option<UserId>, DomainError> {
    match raw {
        None | Some("") => Ok(None),
        Some(raw) => UserId::parse(raw).map(Some),
    }
}

fn post_changes(req: UpdatePostRequest) -> Result<PostChanges, DomainError> {
    let author = match req.author {
        None => None,
        Some(author) => Some(parse_author(author.as_deref())?),
    };

    Ok(PostChanges {
        title: req.title,
        content: req.content,
        author,
        category: req.category,
        slug: req.slug,
    })
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        author: post.author.map(|a| a.to_string()),
        category: post.category,
        slug: post.slug,
    }
}
