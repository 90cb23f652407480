//! Service error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type. Each variant maps to a specific
//! HTTP status code; every failure path returns a structured JSON body of
//! the form `{"detail": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "detail": "Error processing image: ..."
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong.
    pub detail: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// Failures are contained at the request boundary: no variant is allowed
/// to crash the process, and no failure in one request affects another.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The multipart request did not contain the required `file` field.
    #[error("missing required multipart field: file")]
    MissingFileField,

    /// The request body could not be parsed as multipart form data.
    #[error("invalid multipart payload: {0}")]
    InvalidMultipart(String),

    /// Document store failure.
    #[error("store error: {0}")]
    Store(String),

    /// Unexpected failure inside the upload pipeline.
    #[error("error processing image: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFileField => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidMultipart(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
