//! Document-store access for the booking server.
//!
//! # Database: `pet-care`
//!
//! The store is the system of record; this layer only shapes queries and
//! forwards them.
//!
//! ## Collections
//!
//! - `services` - read-only catalog documents, authored out-of-band
//! - `bookings` - booking documents keyed by their stored owner email
//!
//! Collections are created lazily by the store on first insert; there is no
//! migration step.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database};
use secrecy::ExposeSecret;

use crate::config::ServerConfig;

pub mod bookings;
pub mod services;

pub use bookings::BookingRepository;
pub use services::ServiceRepository;

/// Name of the catalog collection.
pub const SERVICES_COLLECTION: &str = "services";
/// Name of the bookings collection.
pub const BOOKINGS_COLLECTION: &str = "bookings";

/// Errors that can occur during repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store rejected or failed the operation.
    #[error("store error: {0}")]
    Store(#[from] mongodb::error::Error),

    /// A stored document did not have the expected shape.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

/// Connect to the document store and return the service database handle.
///
/// The driver is pinned to Stable API V1 in strict mode with deprecation
/// errors, and the deployment is pinged once so a bad connection string
/// fails at startup rather than on the first request. The returned handle
/// is internally pooled and safe to share across all requests for the
/// process lifetime.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the connection string cannot be
/// parsed or the deployment does not answer the ping.
pub async fn connect(config: &ServerConfig) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(config.database_url.expose_secret()).await?;
    options.server_api = Some(
        ServerApi::builder()
            .version(ServerApiVersion::V1)
            .strict(true)
            .deprecation_errors(true)
            .build(),
    );

    let client = Client::with_options(options)?;
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    tracing::info!("connected to document store");

    Ok(client.database(&config.database_name))
}
