//! Error types for the book API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Api Error Enum ==
/// Unified error type for the book API.
///
/// Distinguishes "the query executed but found nothing" (404) from "the
/// query itself failed" (500). Store failures propagate here instead of
/// being collapsed into the not-found case.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested document does not exist
    #[error("{0}")]
    NotFound(String),

    /// A store operation failed
    #[error("{0}")]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Store(err) => {
                error!("Store operation failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(ErrorResponse::new(message));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the book API.
pub type Result<T> = std::result::Result<T, ApiError>;
