//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting domain and infrastructure errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use foodgram_shared::ShoppingListError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Corrupt upstream record; never shown as a user mistake
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<ShoppingListError> for ApiError {
    fn from(err: ShoppingListError) -> Self {
        match err {
            ShoppingListError::InvalidInput(msg) => ApiError::InvalidInput(msg),
            ShoppingListError::NotFound(missing) => ApiError::NotFound(missing.to_string()),
            err @ ShoppingListError::DataIntegrity { .. } => ApiError::DataIntegrity(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            ApiError::DataIntegrity(msg) => {
                error!("Data integrity error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATA_INTEGRITY",
                    "Stored recipe data is inconsistent".to_string(),
                )
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        });

        (status, body).into_response()
    }
}
