//! Application error handling
//!
//! This module provides unified error handling for the API, converting
//! internal errors to the HTTP status taxonomy: validation and persistence
//! failures map to 400, missing records to 404, auth failures to 401/403 and
//! anything unexpected to 500. Internal detail is logged, never serialized.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shop_shared::types::ErrorResponse;
use shop_shared::validation::{field_errors, FieldError};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The target record changed or vanished between load and update
    #[error("Concurrency conflict")]
    ConcurrencyConflict,

    /// The store refused the write; `{0}` is the user-facing message
    #[error("Persistence failure: {0}")]
    Persistence(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(field_errors(&errors))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            ApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                "Invalid request payload".to_string(),
                Some(fields),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, None),
            ApiError::ConcurrencyConflict => (
                StatusCode::BAD_REQUEST,
                "This record has already been updated".to_string(),
                None,
            ),
            ApiError::Persistence(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse { message, errors });
        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
