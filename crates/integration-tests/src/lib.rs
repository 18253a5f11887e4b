//! Integration tests for the pet-care booking backend.
//!
//! # Running Tests
//!
//! ```bash
//! # Black-box tests (no database needed)
//! cargo test -p pet-care-integration-tests
//!
//! # Live-store tests (need a reachable MongoDB)
//! PETCARE_LIVE_DATABASE_URL=mongodb://localhost:27017 \
//!     cargo test -p pet-care-integration-tests -- --ignored
//! ```
//!
//! # How the harness works
//!
//! [`TestServer::spawn`] builds the production router (same assembly as the
//! binary) and serves it on an ephemeral port. The store handle is created
//! without connecting - the driver only dials on the first operation - so
//! every path that rejects before a store call (auth gates, parameter
//! validation, token issuance) runs with no database at all. Tests that do
//! reach the store are `#[ignore]`d and configured via
//! `PETCARE_LIVE_DATABASE_URL`.

use axum::http::HeaderValue;
use secrecy::SecretString;
use serde_json::Value;

use pet_care_server::config::ServerConfig;
use pet_care_server::state::AppState;

/// Signing secret shared by the spawned server and [`mint_token`].
pub const TEST_SECRET: &str = "mF9#kQ2$wZ7!pL4@nR8^tY3&vB6*xC1%";

/// A spawned instance of the production router.
pub struct TestServer {
    /// Base URL of the spawned server, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawn the router on an ephemeral port with a lazily connecting
    /// store handle.
    ///
    /// # Panics
    ///
    /// Panics when the port cannot be bound or the connection string does
    /// not parse; both abort the test run.
    pub async fn spawn() -> Self {
        Self::spawn_with_database_url("mongodb://127.0.0.1:27017").await
    }

    /// Spawn the router against a specific store deployment.
    ///
    /// # Panics
    ///
    /// Panics when the port cannot be bound or the connection string does
    /// not parse; both abort the test run.
    pub async fn spawn_with_database_url(database_url: &str) -> Self {
        let config = test_config(database_url);
        let client = mongodb::Client::with_uri_str(database_url)
            .await
            .expect("connection string must parse");
        let database = client.database(&config.database_name);

        let app = pet_care_server::app(AppState::new(config, database));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().expect("listener has a local addr");
        let base_url = format!("http://{addr}");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Server configuration for tests; mirrors the production defaults with a
/// dedicated database name.
fn test_config(database_url: &str) -> ServerConfig {
    ServerConfig {
        database_url: SecretString::from(database_url),
        database_name: "pet-care-test".to_string(),
        token_secret: SecretString::from(TEST_SECRET),
        host: "127.0.0.1".parse().expect("literal address parses"),
        port: 0,
        allowed_origin: HeaderValue::from_static("http://localhost:5173"),
        sentry_dsn: None,
    }
}

/// Mint a token the spawned server will accept, valid for ten minutes.
///
/// # Panics
///
/// Panics when the payload cannot be encoded; that aborts the test run.
#[must_use]
pub fn mint_token(payload: &Value) -> String {
    let mut claims = payload
        .as_object()
        .expect("token payload must be a JSON object")
        .clone();
    claims.insert(
        "exp".to_string(),
        Value::from((chrono::Utc::now() + chrono::Duration::minutes(10)).timestamp()),
    );

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("failed to encode token")
}

/// Mint a token that expired well past the verifier's leeway.
///
/// # Panics
///
/// Panics when the payload cannot be encoded; that aborts the test run.
#[must_use]
pub fn mint_expired_token(payload: &Value) -> String {
    let mut claims = payload
        .as_object()
        .expect("token payload must be a JSON object")
        .clone();
    claims.insert(
        "exp".to_string(),
        Value::from((chrono::Utc::now() - chrono::Duration::hours(2)).timestamp()),
    );

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("failed to encode token")
}
