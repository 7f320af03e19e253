//! # Web API Error Types
//!
//! Error types specific to the web API and their HTTP response conversions.
//! Leverages thiserror for structured error handling and Axum's
//! IntoResponse for HTTP conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::engine::DecisionError;

/// Web API specific errors with HTTP status code mappings
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Session not found")]
    SessionNotFound,

    #[error("Playbook not found")]
    PlaybookNotFound,

    #[error("An active session already exists for this case and playbook")]
    DuplicateActiveSession,

    #[error("Session was modified concurrently")]
    StaleSession,

    #[error("Invalid option: {message}")]
    InvalidOption { message: String },

    #[error("Session is no longer accepting decisions")]
    SessionNotActive,

    #[error("Unprocessable request: {message}")]
    Unprocessable { message: String },

    #[error("Invalid request: {message}")]
    BadRequest { message: String },

    #[error("Decision graph integrity violation: {message}")]
    GraphIntegrity { message: String },

    #[error("Service temporarily unavailable")]
    ServiceUnavailable,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Create a BadRequest error with a custom message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code, message) = match &self {
            ApiError::SessionNotFound => {
                (StatusCode::NOT_FOUND, "SESSION_NOT_FOUND", "Session not found".to_string())
            }

            ApiError::PlaybookNotFound => (
                StatusCode::NOT_FOUND,
                "PLAYBOOK_NOT_FOUND",
                "Playbook not found".to_string(),
            ),

            ApiError::DuplicateActiveSession => (
                StatusCode::CONFLICT,
                "DUPLICATE_ACTIVE_SESSION",
                "An active session already exists for this case and playbook".to_string(),
            ),

            ApiError::StaleSession => (
                StatusCode::CONFLICT,
                "STALE_SESSION",
                "Session was modified concurrently; refetch and retry".to_string(),
            ),

            ApiError::InvalidOption { message } => {
                (StatusCode::CONFLICT, "INVALID_OPTION", message.clone())
            }

            ApiError::SessionNotActive => (
                StatusCode::CONFLICT,
                "SESSION_NOT_ACTIVE",
                "Session is completed; fetch its final recommendations instead".to_string(),
            ),

            ApiError::Unprocessable { message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_FAILED",
                message.clone(),
            ),

            ApiError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.clone())
            }

            ApiError::GraphIntegrity { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "GRAPH_INTEGRITY",
                message.clone(),
            ),

            ApiError::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                "Service temporarily unavailable".to_string(),
            ),

            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error".to_string(),
            ),
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": message
            }
        });

        (status_code, Json(error_response)).into_response()
    }
}

/// Convert engine errors to API errors
impl From<DecisionError> for ApiError {
    fn from(err: DecisionError) -> Self {
        match err {
            DecisionError::SessionNotFound { .. } => ApiError::SessionNotFound,
            DecisionError::PlaybookNotFound { .. } => ApiError::PlaybookNotFound,
            DecisionError::DuplicateActiveSession { .. } => ApiError::DuplicateActiveSession,
            DecisionError::StaleSession { .. } => ApiError::StaleSession,
            DecisionError::InvalidOption { .. } => ApiError::InvalidOption {
                message: err.to_string(),
            },
            DecisionError::SessionNotActive { .. } => ApiError::SessionNotActive,
            DecisionError::Validation { message } => ApiError::Unprocessable { message },
            DecisionError::GraphIntegrity { message } => ApiError::GraphIntegrity { message },
            DecisionError::Storage { .. } => ApiError::ServiceUnavailable,
        }
    }
}

/// Result type alias for web API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_engine_error_status_mapping() {
        let session_id = Uuid::new_v4();

        let not_found: ApiError = DecisionError::SessionNotFound { session_id }.into();
        assert!(matches!(not_found, ApiError::SessionNotFound));

        let stale: ApiError = DecisionError::StaleSession {
            session_id,
            expected: 2,
        }
        .into();
        assert!(matches!(stale, ApiError::StaleSession));

        let invalid: ApiError = DecisionError::Validation {
            message: "confidence".to_string(),
        }
        .into();
        assert!(matches!(invalid, ApiError::Unprocessable { .. }));
    }
}
