//! API error taxonomy
//!
//! Three shapes reach the wire: 400 with field-level validation detail, 404,
//! and 500 with a generic message. Internal causes are logged, never leaked.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::json;
use somnium_core::StoreError;

/// One field-level validation failure
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// The offending field
    pub field: String,
    /// What was wrong with it
    pub message: String,
}

impl FieldError {
    /// Construct from any pair of printable parts
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error type for every handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or missing input; carries field-level detail
    #[error("Validation error")]
    Validation(Vec<FieldError>),
    /// The referenced record does not exist
    #[error("Dream not found")]
    NotFound,
    /// Store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Single-field validation failure
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation(vec![FieldError::new(field, message)])
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Validation error",
                    "errors": errors,
                })),
            )
                .into_response(),

            // A store-level miss is the same 404 as an explicit one
            ApiError::NotFound | ApiError::Store(StoreError::NotFound(_)) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Dream not found" })),
            )
                .into_response(),

            ApiError::Store(err) => {
                tracing::error!("Store error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
