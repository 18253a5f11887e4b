//! Access-token issuing and verification.
//!
//! Credentials are HS256 JWTs over an arbitrary caller-supplied identity
//! payload, valid for one hour. Nothing is persisted server-side:
//! verification is a pure function of the token and the signing secret,
//! composed into the request pipeline by the
//! [`RequireIdentity`](crate::middleware::RequireIdentity) extractor.

mod error;

pub use error::AuthError;

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How long an issued token stays valid, in seconds.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Timestamp claims the issuer owns; stripped from the caller payload
/// before signing so the configured expiry always wins.
const RESERVED_CLAIMS: &[&str] = &["exp", "iat", "nbf"];

/// The signed claim set: the caller's payload plus the expiry.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    exp: i64,
    #[serde(flatten)]
    identity: Map<String, Value>,
}

/// Identity decoded from a verified access token.
#[derive(Debug, Clone)]
pub struct Identity {
    /// The `email` claim, when the signed payload carried a string one.
    pub email: Option<String>,
    /// The full claim map exactly as signed.
    pub claims: Map<String, Value>,
}

/// Sign an identity payload into an access token.
///
/// Any JSON object is signable; no shape validation is performed. The
/// reserved timestamp claims are stripped and the expiry set to
/// [`TOKEN_TTL_SECS`] from now.
///
/// # Errors
///
/// Returns [`AuthError::Signing`] if encoding fails.
pub fn issue(payload: Map<String, Value>, secret: &SecretString) -> Result<String, AuthError> {
    let mut identity = payload;
    for claim in RESERVED_CLAIMS {
        identity.remove(*claim);
    }

    let claims = Claims {
        exp: (Utc::now() + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        identity,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(AuthError::Signing)
}

/// Verify a token's signature and expiry and decode the identity.
///
/// A pure gate: the claim payload comes back exactly as signed, never
/// mutated.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredential`] for a bad signature, an
/// expired token, or a token that does not parse.
pub fn verify(token: &str, secret: &SecretString) -> Result<Identity, AuthError> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map_err(AuthError::InvalidCredential)?;

    let email = data
        .claims
        .identity
        .get("email")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned);

    Ok(Identity {
        email,
        claims: data.claims.identity,
    })
}
