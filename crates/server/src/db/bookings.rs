//! Booking repository.
//!
//! Three independent single-document operations with no cross-operation
//! coordination: verbatim insert, owner-filtered find, delete by id.

use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Collection, Database};

use pet_care_core::{BookingId, Email};

use super::{BOOKINGS_COLLECTION, RepositoryError};
use crate::models::booking::Booking;

/// Repository for booking operations.
pub struct BookingRepository {
    collection: Collection<Document>,
}

impl BookingRepository {
    /// Create a new booking repository over the injected store handle.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(BOOKINGS_COLLECTION),
        }
    }

    /// Insert a booking document exactly as supplied by the caller.
    ///
    /// No schema validation and no owner stamping: the stored email field
    /// is whatever the caller sent, and that field alone determines
    /// ownership for later reads.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the insert is rejected.
    pub async fn create(&self, booking: Document) -> Result<Bson, RepositoryError> {
        let result = self.collection.insert_one(booking).await?;
        Ok(result.inserted_id)
    }

    /// List bookings whose stored email equals `owner`, in store-native
    /// order. `None` matches every booking.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the query fails and
    /// `RepositoryError::MalformedDocument` if a stored booking lacks a
    /// store-assigned id.
    pub async fn list_for_owner(
        &self,
        owner: Option<&Email>,
    ) -> Result<Vec<Booking>, RepositoryError> {
        let filter = owner_filter(owner);
        let documents: Vec<Document> = self.collection.find(filter).await?.try_collect().await?;
        documents.into_iter().map(booking_from_document).collect()
    }

    /// Delete the booking with the given id.
    ///
    /// Returns the store's deletion count: 0 when no document matched,
    /// 1 when one was removed. An unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the delete is rejected.
    pub async fn delete(&self, id: BookingId) -> Result<u64, RepositoryError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": mongodb::bson::oid::ObjectId::from(id) })
            .await?;
        Ok(result.deleted_count)
    }
}

/// Exact-match owner filter; no owner matches every booking.
fn owner_filter(owner: Option<&Email>) -> Document {
    owner.map_or_else(Document::new, |email| doc! { "email": email.as_str() })
}

/// Project a stored booking document into the typed model.
fn booking_from_document(mut document: Document) -> Result<Booking, RepositoryError> {
    let id = match document.remove("_id") {
        Some(Bson::ObjectId(oid)) => BookingId::from(oid),
        _ => {
            return Err(RepositoryError::MalformedDocument(
                "booking document missing ObjectId _id".to_string(),
            ));
        }
    };

    let email = match document.remove("email") {
        Some(Bson::String(email)) => Some(email),
        Some(other) => {
            document.insert("email", other);
            None
        }
        None => None,
    };

    Ok(Booking {
        id,
        email,
        details: document,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use mongodb::bson::oid::ObjectId;

    use super::*;

    #[test]
    fn test_owner_filter_empty_without_owner() {
        assert_eq!(owner_filter(None), Document::new());
    }

    #[test]
    fn test_owner_filter_matches_stored_email_field() {
        let email = Email::parse("owner@example.com").unwrap();
        assert_eq!(
            owner_filter(Some(&email)),
            doc! { "email": "owner@example.com" }
        );
    }

    #[test]
    fn test_booking_from_document_lifts_id_and_email() {
        let oid = ObjectId::parse_str("65b2a1f0c4d5e6a7b8091a2b").unwrap();
        let document = doc! {
            "_id": oid,
            "email": "owner@example.com",
            "service": "grooming",
        };

        let booking = booking_from_document(document).unwrap();
        assert_eq!(booking.id.to_hex(), "65b2a1f0c4d5e6a7b8091a2b");
        assert_eq!(booking.email.as_deref(), Some("owner@example.com"));
        assert_eq!(booking.details, doc! { "service": "grooming" });
    }

    #[test]
    fn test_booking_from_document_requires_object_id() {
        let document = doc! { "email": "owner@example.com" };
        assert!(matches!(
            booking_from_document(document),
            Err(RepositoryError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_booking_from_document_keeps_non_string_email_verbatim() {
        let document = doc! { "_id": ObjectId::new(), "email": 42_i32 };
        let booking = booking_from_document(document).unwrap();
        assert_eq!(booking.email, None);
        assert_eq!(booking.details, doc! { "email": 42_i32 });
    }
}
