//! Response DTOs for the book API
//!
//! Success responses carry the book document(s) directly; this module only
//! defines the shared error body shape.

use serde::Serialize;

// == Error Response ==
/// Error response body for all error conditions (`{"error": <message>}`).
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
