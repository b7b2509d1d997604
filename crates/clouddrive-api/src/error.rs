//! HTTP-boundary error type and its mapping to responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use clouddrive_core::error::{AppError, ErrorKind};

/// Error type returned by every handler and extractor in this crate.
///
/// Wraps the domain [`AppError`] so the HTTP mapping can live here; `?`
/// converts domain errors at the handler boundary.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP status and stable error code for a domain error kind.
pub fn status_for_kind(kind: &ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        // Duplicate email reads as a plain bad request, not 409.
        ErrorKind::Validation | ErrorKind::Conflict => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
        ErrorKind::Database
        | ErrorKind::Storage
        | ErrorKind::Configuration
        | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_for_kind(&self.0.kind);

        if status.is_server_error() {
            tracing::error!(kind = %self.0.kind, error = %self.0.message, "Internal server error");
        }

        let message = if status.is_server_error() {
            // Internal detail stays in the logs.
            "Internal server error".to_string()
        } else {
            self.0.message.clone()
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for_kind(&ErrorKind::NotFound).0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for_kind(&ErrorKind::Authentication).0,
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_for_kind(&ErrorKind::Authorization).0,
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_for_kind(&ErrorKind::Conflict).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for_kind(&ErrorKind::PayloadTooLarge).0,
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            status_for_kind(&ErrorKind::Storage).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_errors_convert_at_the_boundary() {
        let api_err: ApiError = AppError::not_found("File not found").into();
        let response = api_err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let api_err: ApiError =
            AppError::database("connection refused for host db:5432").into();
        let response = api_err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
