//! API error types with IntoResponse
//!
//! Store failures expose the underlying message verbatim; a missing row is
//! a fixed 404 message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// Message returned for id-targeted operations that matched no row.
pub const NOT_FOUND_MESSAGE: &str = "Customer not found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body or path (400)
    BadRequest(String),

    /// No customer with the requested id (404)
    NotFound,

    /// Any store failure (500, logged)
    Store(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::BadRequest(reason) => (StatusCode::BAD_REQUEST, json!({ "error": reason })),
            Self::NotFound => (StatusCode::NOT_FOUND, json!({ "message": NOT_FOUND_MESSAGE })),
            Self::Store(e) => {
                tracing::error!(error = %e, "store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": e.message() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}
