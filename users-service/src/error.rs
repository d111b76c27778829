//! Error types and HTTP response conversion

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::repository::{RepositoryError, RepositoryErrorKind};

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the service
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured repository error with operation context
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// Resource or route not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request body exceeded the configured limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Repository(e) => match e.kind {
                RepositoryErrorKind::NotFound => StatusCode::NOT_FOUND,
                RepositoryErrorKind::ValidationFailed => StatusCode::BAD_REQUEST,
            },
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            Error::Config(_) | Error::Io(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error response body
///
/// Every failure carries `success: false` and a human-readable message.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,

    /// Error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            Error::Repository(e) => {
                tracing::debug!(
                    operation = %e.operation,
                    kind = %e.kind,
                    entity_id = ?e.entity_id,
                    "Repository error: {}", e.message
                );
                e.message
            }
            Error::NotFound(msg) | Error::BadRequest(msg) | Error::PayloadTooLarge(msg) => msg,
            Error::Timeout(after) => {
                tracing::warn!("Request timed out after {:?}", after);
                "Request timed out".to_string()
            }
            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                "Internal server error".to_string()
            }
            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                "Internal server error".to_string()
            }
            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// Manual From implementations for boxed errors
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<BytesRejection> for Error {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Error::PayloadTooLarge(rejection.body_text())
        } else {
            Error::BadRequest(rejection.body_text())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryOperation;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response_shape() {
        let response = Error::NotFound("User not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User not found");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = Error::Internal("lock poisoned at 0x1234".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_repository_not_found_maps_to_404() {
        let err: Error = RepositoryError::not_found(RepositoryOperation::Update, "User", 42).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let body = body_json(err.into_response()).await;
        assert_eq!(body["message"], "User not found");
    }

    #[test]
    fn test_repository_validation_maps_to_400() {
        let err: Error =
            RepositoryError::validation_failed(RepositoryOperation::Create, "User", "name is empty")
                .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            Error::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::PayloadTooLarge("x".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            Error::Timeout(Duration::from_secs(30)).status(),
            StatusCode::REQUEST_TIMEOUT
        );
        assert_eq!(
            Error::Io(std::io::Error::other("disk")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
