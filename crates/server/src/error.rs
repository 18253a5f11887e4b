//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side failures to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`. Every failure body is a single message field.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::catalog::CatalogParamError;
use crate::services::auth::AuthError;

/// Application-level error type for the booking server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] RepositoryError),

    /// Access-token operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Authenticated identity does not own the requested resource.
    #[error("Forbidden: requested owner does not match the verified identity")]
    OwnerMismatch,

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<CatalogParamError> for AppError {
    fn from(err: CatalogParamError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// Error body: a message field only.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store(_) | Self::Auth(AuthError::Signing(_))) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Store(_) | Self::Auth(AuthError::Signing(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::OwnerMismatch => StatusCode::FORBIDDEN,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match self {
            Self::Store(_) => "internal server error".to_string(),
            Self::Auth(err) => err.client_message().to_string(),
            Self::OwnerMismatch => "forbidden access".to_string(),
            Self::BadRequest(msg) => msg,
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
