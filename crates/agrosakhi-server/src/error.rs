//! API error type and its JSON rendering

use agrosakhi_core::StorageError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Body failed to parse into the expected shape
    #[error("Invalid {0} data")]
    InvalidData(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    /// Failure with a caller-facing message; details are logged where it is raised
    #[error("{0}")]
    Failed(&'static str),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidData(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Failed(_) | ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Storage(e) => {
                tracing::error!("Storage failure: {}", e);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (self.status(), Json(json!({ "message": message }))).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
