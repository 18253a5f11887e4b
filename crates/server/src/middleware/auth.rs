//! Credential verification extractor.
//!
//! Protected handlers opt in by taking [`RequireIdentity`]. The extractor
//! reads the token cookie, verifies it against the server secret, and hands
//! the decoded identity to the handler. It is a gate, not a transform: the
//! claim payload reaches the handler exactly as it was signed.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use crate::error::AppError;
use crate::services::auth::{self, AuthError, Identity};
use crate::state::AppState;

/// Name of the credential cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Extractor that requires a verified access token.
///
/// Rejects with 401 when the cookie is absent and with a distinct 401 when
/// it fails verification.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireIdentity(identity): RequireIdentity,
/// ) -> impl IntoResponse {
///     format!("Hello, {:?}!", identity.email)
/// }
/// ```
pub struct RequireIdentity(pub Identity);

impl FromRequestParts<AppState> for RequireIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            cookie_value(&parts.headers, TOKEN_COOKIE).ok_or(AuthError::MissingCredential)?;
        let identity = auth::verify(token, &state.config().token_secret)?;
        Ok(Self(identity))
    }
}

/// Find a cookie's value in the request's Cookie headers.
///
/// Handles multiple Cookie headers and multiple `name=value` pairs per
/// header; the first match wins.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
