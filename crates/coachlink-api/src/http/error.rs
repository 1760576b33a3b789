//! Application error type mapping to HTTP status codes and envelope format.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};

use coachlink_types::error::{ProfileError, ServiceError, ValidationError};

use crate::http::response::{new_request_id, ApiResponse};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Errors surfaced by the core services.
    Service(ServiceError),
    /// Malformed request body or query string.
    Validation(String),
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        AppError::Service(e)
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Service(e.into())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    /// Machine-readable code and client-facing message.
    ///
    /// Upstream failures get a generic message; the cause is logged here.
    fn code_and_message(&self) -> (&'static str, String) {
        match self {
            AppError::Service(ServiceError::Validation(e)) => ("VALIDATION_ERROR", e.to_string()),
            AppError::Service(ServiceError::Profile(ProfileError::NotFound)) => (
                "PROFILE_NOT_FOUND",
                "Learner profile not found".to_string(),
            ),
            AppError::Service(ServiceError::Profile(e)) => {
                tracing::error!(error = %e, "learner memory failure");
                ("INTERNAL_ERROR", "Learner memory unavailable".to_string())
            }
            AppError::Service(ServiceError::Vendor(e)) => {
                tracing::error!(error = %e, "chat vendor call failed");
                ("UPSTREAM_ERROR", "Chat service request failed".to_string())
            }
            AppError::Service(ServiceError::Llm(e)) => {
                tracing::error!(error = %e, "coach completion failed");
                ("UPSTREAM_ERROR", "AI coach is unavailable".to_string())
            }
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = self.code_and_message();
        ApiResponse::error(code, &message, new_request_id(), 0).into_response()
    }
}
