//! Startup seeding from a JSON file of create requests.

use std::path::Path;

use postboard_core::domain::{NewPost, UserId};
use postboard_core::ports::PostRepository;
use postboard_shared::dto::CreatePostRequest;

/// Failure to load or store the seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to store seed posts: {0}")]
    Store(#[from] postboard_core::RepoError),
}

/// Convert seed entries into new posts, skipping invalid ones.
pub fn prepare(entries: Vec<CreatePostRequest>) -> Vec<NewPost> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let mut new = NewPost::new(
                entry.title.unwrap_or_default(),
                entry.content.unwrap_or_default(),
            );
            if let Err(e) = new.validate() {
                tracing::warn!(index, error = %e, "Skipping seed entry");
                return None;
            }
            if let Some(raw) = entry.author.as_deref().filter(|a| !a.is_empty()) {
                match UserId::parse(raw) {
                    Ok(author) => new.author = Some(author),
                    Err(e) => {
                        tracing::warn!(index, error = %e, "Skipping seed entry");
                        return None;
                    }
                }
            }
            new.category = entry.category;
            new.slug = entry.slug;
            Some(new)
        })
        .collect()
}

/// Bulk insert the posts listed in `path`. Returns how many were stored.
pub async fn seed_from_file(posts: &dyn PostRepository, path: &Path) -> Result<usize, SeedError> {
    let raw = tokio::fs::read(path).await?;
    let entries: Vec<CreatePostRequest> = serde_json::from_slice(&raw)?;

    let created = posts.create_many(prepare(entries)).await?;
    tracing::info!(count = created.len(), path = %path.display(), "Seeded posts");
    Ok(created.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prepare_skips_invalid_entries() {
        let entries: Vec<CreatePostRequest> = serde_json::from_value(json!([
            { "title": "Kept", "content": "Body", "category": "general" },
            { "content": "No title" },
            { "title": "Bad author", "content": "Body", "author": "nope" },
            { "title": "Empty author", "content": "Body", "author": "" }
        ]))
        .unwrap();

        let posts = prepare(entries);

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Kept");
        assert_eq!(posts[0].category.as_deref(), Some("general"));
        assert_eq!(posts[1].author, None);
    }
}
