//! Catalog repository for the services collection.
//!
//! Read-only: catalog documents are created and updated directly in the
//! store, never through this server.

use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Collection, Database};

use pet_care_core::ServiceId;

use super::{RepositoryError, SERVICES_COLLECTION};
use crate::models::catalog::{CatalogPage, CatalogSelection, SortSpec};
use crate::models::service::Service;

/// Repository for catalog queries.
pub struct ServiceRepository {
    collection: Collection<Document>,
}

impl ServiceRepository {
    /// Create a new catalog repository over the injected store handle.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(SERVICES_COLLECTION),
        }
    }

    /// Run a catalog page query.
    ///
    /// The returned count is the estimated size of the whole collection,
    /// not the number of documents matching the brand filter; clients
    /// paginate against the collection total.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Store` if the store rejects the query and
    /// `RepositoryError::MalformedDocument` if a catalog document lacks a
    /// store-assigned id.
    pub async fn list(
        &self,
        selection: &CatalogSelection,
    ) -> Result<CatalogPage, RepositoryError> {
        let count = self.collection.estimated_document_count().await?;

        let mut find = self
            .collection
            .find(brand_filter(selection.brand.as_deref()));
        if let Some(sort) = selection.sort.as_ref() {
            find = find.sort(sort_spec(sort));
        }
        if let Some(page) = selection.page {
            find = find.skip(page.offset()).limit(page.limit());
        }

        let documents: Vec<Document> = find.await?.try_collect().await?;
        let result = documents
            .into_iter()
            .map(service_from_document)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CatalogPage { count, result })
    }
}

/// Exact-match brand filter; no brand matches every document.
fn brand_filter(brand: Option<&str>) -> Document {
    brand.map_or_else(Document::new, |brand| doc! { "brand": brand })
}

/// The store's sort document for a single-field directional sort.
fn sort_spec(sort: &SortSpec) -> Document {
    doc! { sort.field.as_str(): sort.order.direction() }
}

/// Project a stored catalog document into the typed model.
///
/// Only `_id`, a string `brand`, and a numeric `price` are lifted out;
/// fields of any other shape stay in the verbatim remainder.
fn service_from_document(mut document: Document) -> Result<Service, RepositoryError> {
    let id = match document.remove("_id") {
        Some(Bson::ObjectId(oid)) => ServiceId::from(oid),
        _ => {
            return Err(RepositoryError::MalformedDocument(
                "service document missing ObjectId _id".to_string(),
            ));
        }
    };

    let brand = match document.remove("brand") {
        Some(Bson::String(brand)) => Some(brand),
        Some(other) => {
            document.insert("brand", other);
            None
        }
        None => None,
    };

    let price = match document.remove("price") {
        Some(Bson::Double(price)) => Some(price),
        Some(Bson::Int32(price)) => Some(f64::from(price)),
        #[allow(clippy::cast_precision_loss)] // Prices are nowhere near 2^52
        Some(Bson::Int64(price)) => Some(price as f64),
        Some(other) => {
            document.insert("price", other);
            None
        }
        None => None,
    };

    Ok(Service {
        id,
        brand,
        price,
        details: document,
    })
}
