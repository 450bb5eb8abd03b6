//! Thin reqwest client over `/api/posts`.

use postboard_shared::ErrorResponse;
use postboard_shared::MessageResponse;
use postboard_shared::dto::{CreatePostRequest, ListPostsQuery, PostResponse, UpdatePostRequest};
use reqwest::{Client, Response};

/// API address used when neither `--api-url` nor `API_URL` is given.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status; `message` is the server's `error` field.
    #[error("Server responded {status}: {message}")]
    Api { status: u16, message: String },
}

/// Client for the posts resource.
#[derive(Debug, Clone)]
pub struct PostsClient {
    http: Client,
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/api/posts", self.base_url)
    }

    pub fn item_url(&self, id: &str) -> String {
        format!("{}/api/posts/{}", self.base_url, id)
    }

    pub async fn list(&self, query: &ListPostsQuery) -> Result<Vec<PostResponse>, ClientError> {
        let res = self
            .http
            .get(self.collection_url())
            .query(query)
            .send()
            .await?;
        Ok(checked(res).await?.json().await?)
    }

    pub async fn get(&self, id: &str) -> Result<PostResponse, ClientError> {
        let res = self.http.get(self.item_url(id)).send().await?;
        Ok(checked(res).await?.json().await?)
    }

    pub async fn create(&self, req: &CreatePostRequest) -> Result<PostResponse, ClientError> {
        let res = self
            .http
            .post(self.collection_url())
            .json(req)
            .send()
            .await?;
        Ok(checked(res).await?.json().await?)
    }

    pub async fn update(
        &self,
        id: &str,
        req: &UpdatePostRequest,
    ) -> Result<PostResponse, ClientError> {
        let res = self.http.put(self.item_url(id)).json(req).send().await?;
        Ok(checked(res).await?.json().await?)
    }

    pub async fn delete(&self, id: &str) -> Result<MessageResponse, ClientError> {
        let res = self.http.delete(self.item_url(id)).send().await?;
        Ok(checked(res).await?.json().await?)
    }
}

async fn checked(res: Response) -> Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let message = match res.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
