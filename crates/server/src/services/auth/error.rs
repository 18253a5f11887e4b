//! Access-token error types.

use thiserror::Error;

/// Errors that can occur during access-token operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No token cookie on the request.
    #[error("missing access token cookie")]
    MissingCredential,

    /// Signature, expiry, or shape verification failed.
    #[error("invalid or expired access token")]
    InvalidCredential(#[source] jsonwebtoken::errors::Error),

    /// The identity payload could not be signed.
    #[error("failed to sign access token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// Client-facing message; verification detail stays server-side.
    ///
    /// Missing and invalid credentials deliberately read differently so a
    /// caller can tell a dropped cookie from a stale one.
    #[must_use]
    pub const fn client_message(&self) -> &'static str {
        match self {
            Self::MissingCredential => "missing access token cookie",
            Self::InvalidCredential(_) => "invalid or expired access token",
            Self::Signing(_) => "internal server error",
        }
    }
}
