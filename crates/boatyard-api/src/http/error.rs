//! Application error type mapping to HTTP status codes.
//!
//! Every error body has the same shape:
//! ```json
//! { "errors": [ { "code": "VALIDATION_ERROR", "message": "name: Name is mandatory" } ] }
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use boatyard_types::error::{AuthError, BoatError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Boat-related errors.
    Boat(BoatError),
    /// Authentication failure.
    Unauthorized(String),
    /// Request body could not be read as the expected JSON.
    Validation(String),
    /// No route for this path.
    RouteNotFound,
    /// The path exists but not with this method.
    MethodNotAllowed,
    /// Generic internal error.
    Internal(String),
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub errors: Vec<ErrorDetail>,
}

/// Individual error detail.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Machine-readable error code.
    pub code: &'static str,
    /// Human-readable error message.
    pub message: String,
}

impl From<BoatError> for AppError {
    fn from(e: BoatError) -> Self {
        AppError::Boat(e)
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Internal(msg) => AppError::Internal(msg),
            other => AppError::Unauthorized(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Boat(e @ BoatError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Boat(BoatError::NotFound) => {
                (StatusCode::NOT_FOUND, "BOAT_NOT_FOUND", "Boat not found".to_string())
            }
            AppError::Boat(e @ BoatError::Storage(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", e.to_string())
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::RouteNotFound => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", "No such resource".to_string())
            }
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                "Method not supported for this resource".to_string(),
            ),
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(code, "{message}");
        }

        let body = ErrorBody {
            errors: vec![ErrorDetail { code, message }],
        };
        (status, Json(body)).into_response()
    }
}
