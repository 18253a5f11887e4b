//! Typed booking projection and store acknowledgments.

use mongodb::bson::{Bson, Document};
use serde::Serialize;
use serde_json::Value;

use pet_care_core::BookingId;

/// A booking as served to clients.
///
/// Booking bodies are caller-supplied and opaque to this layer; only the
/// identifier and the owning email are typed, the rest is carried through
/// verbatim in `details`.
#[derive(Debug, Serialize)]
pub struct Booking {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: BookingId,
    /// Stored owner email; ownership is determined solely by this field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Remaining booking fields, passed through unmodified.
    #[serde(flatten)]
    pub details: Document,
}

/// Insertion acknowledgment returned by the create operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    /// The new document's identifier: a hex string for store-assigned ids,
    /// the caller's value verbatim otherwise.
    pub inserted_id: Value,
}

impl InsertAck {
    /// Build an acknowledgment from the store's inserted id.
    #[must_use]
    pub fn new(inserted_id: Bson) -> Self {
        let inserted_id = match inserted_id {
            Bson::ObjectId(oid) => Value::String(oid.to_hex()),
            other => other.into_relaxed_extjson(),
        };
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Deletion acknowledgment returned by the cancel operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    /// 1 when a document was removed, 0 when nothing matched.
    pub deleted_count: u64,
}

impl DeleteAck {
    /// Build an acknowledgment from the store's deletion count.
    #[must_use]
    pub const fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
