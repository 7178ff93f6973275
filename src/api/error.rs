//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error_handling::{DatabaseError, ValidationError};

/// Errors a handler can return.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request input failed boundary validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Loading candidate records failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::Validation(e) => {
                log::debug!("Rejected request: {}", e);
                e.to_string()
            }
            ApiError::Database(e) => {
                log::warn!("Database error while serving request: {}", e);
                "internal database error".to_string()
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
