//! Typed catalog projection.

use mongodb::bson::Document;
use serde::Serialize;

use pet_care_core::ServiceId;

/// A catalog service as served to clients.
///
/// Catalog documents are authored directly in the store, so only the fields
/// the API itself reasons about are typed; everything else is carried
/// through verbatim in `details`.
#[derive(Debug, Serialize)]
pub struct Service {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: ServiceId,
    /// Brand name used for exact-match filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Listed price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Remaining descriptive fields, passed through unmodified.
    #[serde(flatten)]
    pub details: Document,
}
