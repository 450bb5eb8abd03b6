//! Response bodies shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Error body: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub const SERVER_ERROR: &'static str = "Server error";
    pub const NOT_FOUND: &'static str = "Not found";
    pub const INVALID_ID: &'static str = "Invalid ID";
    pub const VALIDATION_FAILED: &'static str = "Validation failed";
    pub const INVALID_DATA: &'static str = "Invalid data";

    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn server_error() -> Self {
        Self::new(Self::SERVER_ERROR)
    }

    pub fn not_found() -> Self {
        Self::new(Self::NOT_FOUND)
    }

    pub fn invalid_id() -> Self {
        Self::new(Self::INVALID_ID)
    }

    pub fn validation_failed() -> Self {
        Self::new(Self::VALIDATION_FAILED)
    }

    pub fn invalid_data() -> Self {
        Self::new(Self::INVALID_DATA)
    }
}

/// Plain acknowledgement body: `{"message": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Deleted".to_string(),
        }
    }
}
