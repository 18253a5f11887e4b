//! Access-token route handlers.

use axum::Json;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::middleware::TOKEN_COOKIE;
use crate::services::auth;
use crate::state::AppState;

/// Response body confirming a token was issued.
#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub success: bool,
}

/// Issue an access token for the posted identity payload.
///
/// POST /api/v1/auth/access-token
///
/// Any JSON object is signable. The token travels only in the cookie,
/// never in the body: HttpOnly keeps scripts away from it, Secure keeps it
/// off plain HTTP, and SameSite=None lets the browser client on the
/// configured origin send it cross-site. No Max-Age is set; the token
/// itself carries the one-hour expiry.
///
/// # Errors
///
/// Returns 500 if the payload cannot be signed.
pub async fn issue_access_token(
    State(state): State<AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<impl IntoResponse> {
    let token = auth::issue(payload, &state.config().token_secret)?;
    let cookie = format!("{TOKEN_COOKIE}={token}; Path=/; HttpOnly; Secure; SameSite=None");

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(AccessTokenResponse { success: true }),
    ))
}
