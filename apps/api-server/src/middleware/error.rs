//! Error handling - maps handler failures to `{"error": ...}` responses.

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use postboard_shared::ErrorResponse;
use thiserror::Error;

/// Application-level error type.
///
/// Each variant renders as one of the fixed messages of the posts API.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid ID")]
    InvalidId,

    #[error("Validation failed")]
    ValidationFailed,

    #[error("Invalid data")]
    InvalidData,

    /// Unclassified fault; the detail is logged, never sent.
    #[error("Server error")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidId | AppError::ValidationFailed | AppError::InvalidData => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound => ErrorResponse::not_found(),
            AppError::InvalidId => ErrorResponse::invalid_id(),
            AppError::ValidationFailed => ErrorResponse::validation_failed(),
            AppError::InvalidData => ErrorResponse::invalid_data(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::server_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

/// JSON body rejection on the collection route (create).
pub fn invalid_data_body(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected post body");
    AppError::InvalidData.into()
}

/// JSON body rejection on the item route (update).
pub fn invalid_id_body(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected update body");
    AppError::InvalidId.into()
}

/// Undecodable list query string; the list path has a single failure code.
pub fn invalid_list_query(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Internal(format!("list query rejected: {err}")).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, ErrorResponse) {
        let res = err.error_response();
        let status = res.status();
        let bytes = to_bytes(res.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_messages_and_codes() {
        let cases = [
            (AppError::NotFound, 404, "Not found"),
            (AppError::InvalidId, 400, "Invalid ID"),
            (AppError::ValidationFailed, 400, "Validation failed"),
            (AppError::InvalidData, 400, "Invalid data"),
            (AppError::Internal("db down".to_string()), 500, "Server error"),
        ];

        for (err, code, message) in cases {
            let (status, body) = body_of(err).await;
            assert_eq!(status.as_u16(), code);
            assert_eq!(body.error, message);
        }
    }
}
