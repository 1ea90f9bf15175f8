//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use axum::http::StatusCode;
use thiserror::Error;

/// user service error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request body or path failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Username already registered
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Username not registered, or path did not match any route
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// Returns a safe error message for external clients.
    ///
    /// The `Display` implementation carries the full details and is meant
    /// for server logs only.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Invalid request",
            Self::Conflict(_) => "User already exists",
            Self::NotFound(_) => "Not found",
            Self::Serialization(_) => "Internal server error",
        }
    }

    /// HTTP status code for this error.
    ///
    /// Validation failures map to 500 to stay compatible with existing clients.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// user service result type
pub type ServiceResult<T> = Result<T, ServiceError>;
