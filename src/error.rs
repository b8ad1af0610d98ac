//! Error codes and the JSON error body returned by the HTTP boundary.
//!
//! DESIGN
//! ======
//! Service errors stay transport-agnostic. Each one exposes a grepable
//! `E_*` code through [`ErrorCode`]; route modules pick the status code and
//! wrap the error in an [`ApiError`], which renders as
//! `{ "error": "<code>", "message": "<display>" }`.
//!
//! Request bodies and path parameters go through [`ApiJson`] and [`ApiPath`],
//! so extractor rejections use the same body shape as service errors.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// Grepable error code for structured error responses.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// Error response: status code plus structured body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, err: &impl ErrorCode) -> Self {
        Self { status, body: ErrorBody { error: err.error_code(), message: err.to_string() } }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            body: ErrorBody { error: "E_INVALID_BODY", message: rejection.body_text() },
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self {
            status: rejection.status(),
            body: ErrorBody { error: "E_INVALID_PATH", message: rejection.body_text() },
        }
    }
}

// =============================================================================
// EXTRACTORS
// =============================================================================

/// `Json` extractor whose rejection renders as an [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Path` extractor whose rejection renders as an [`ApiError`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("console not found: 7")]
    struct Missing;

    impl ErrorCode for Missing {
        fn error_code(&self) -> &'static str {
            "E_CONSOLE_NOT_FOUND"
        }
    }

    #[test]
    fn api_error_carries_code_and_message() {
        let err = ApiError::new(StatusCode::NOT_FOUND, &Missing);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.body.error, "E_CONSOLE_NOT_FOUND");
        assert_eq!(err.body.message, "console not found: 7");
    }

    #[test]
    fn api_error_renders_status() {
        let response = ApiError::new(StatusCode::CONFLICT, &Missing).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn error_body_serializes_error_and_message_keys() {
        let body = ErrorBody { error: "E_GAME_CONFLICT", message: "dup".into() };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "E_GAME_CONFLICT", "message": "dup" }));
    }
}
