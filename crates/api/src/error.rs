//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource addressed by path id was not found.
    NotFound(String),
    /// Workflow error.
    Domain(DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => error_body(StatusCode::NOT_FOUND, msg),
            ApiError::Domain(err) => domain_error_to_response(err),
        }
    }
}

fn domain_error_to_response(err: DomainError) -> Response {
    match err {
        DomainError::Validation(violations) => {
            let errors: Vec<String> = violations.into_iter().map(|v| v.message).collect();
            let body = serde_json::json!({
                "message": "Validation failed",
                "errors": errors,
            });
            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        }
        // Path-addressed lookups surface 404; everything the workflows
        // reject about a POST body is a 400.
        DomainError::OrderNotFound(_) => error_body(StatusCode::NOT_FOUND, err.to_string()),
        DomainError::CustomerNotFound
        | DomainError::ProductNotFound(_)
        | DomainError::DuplicateEmail
        | DomainError::InsufficientStock(_) => {
            error_body(StatusCode::BAD_REQUEST, err.to_string())
        }
        DomainError::Store(store_err) => {
            tracing::error!(error = %store_err, "internal server error");
            error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            )
        }
    }
}

fn error_body(status: StatusCode, message: String) -> Response {
    let body = serde_json::json!({ "message": message });
    (status, axum::Json(body)).into_response()
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}
