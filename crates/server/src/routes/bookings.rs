//! Booking route handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use mongodb::bson::Document;
use serde::Deserialize;

use pet_care_core::{BookingId, Email};

use crate::db::BookingRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireIdentity;
use crate::models::booking::{Booking, DeleteAck, InsertAck};
use crate::state::AppState;

/// Create a booking from the caller-supplied document.
///
/// POST /api/v1/user/create-booking
///
/// The body is inserted verbatim: no schema validation and no owner
/// stamping from any credential. Whatever email field the caller sent is
/// what later owner-scoped reads will match on.
///
/// # Errors
///
/// Returns 500 if the store rejects the insert.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(booking): Json<Document>,
) -> Result<Json<InsertAck>> {
    let inserted_id = BookingRepository::new(state.database())
        .create(booking)
        .await?;
    Ok(Json(InsertAck::new(inserted_id)))
}

/// Query parameters for the owner-scoped booking list.
#[derive(Debug, Deserialize)]
pub struct BookingsParams {
    /// Owner email; must equal the verified identity's email.
    pub email: Option<String>,
}

/// List bookings for the requested owner.
///
/// GET /api/v1/user/bookings (requires a verified token cookie)
///
/// The requested email must equal the verified identity's email exactly;
/// a mismatch is rejected before the store is touched. When both are
/// absent the check passes and every booking is returned, matching the
/// historical surface.
///
/// # Errors
///
/// Returns 401 without a verifiable credential, 403 on an owner mismatch,
/// 400 for an unparseable owner email, 500 for a store failure.
pub async fn list_bookings(
    State(state): State<AppState>,
    RequireIdentity(identity): RequireIdentity,
    Query(params): Query<BookingsParams>,
) -> Result<Json<Vec<Booking>>> {
    if params.email != identity.email {
        return Err(AppError::OwnerMismatch);
    }

    let owner = params
        .email
        .as_deref()
        .map(Email::parse)
        .transpose()
        .map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))?;

    let bookings = BookingRepository::new(state.database())
        .list_for_owner(owner.as_ref())
        .await?;
    Ok(Json(bookings))
}

/// Cancel a booking by id.
///
/// DELETE /api/v1/user/cancel-booking/{id}
///
/// Unauthenticated and without an ownership check, matching the historical
/// surface. Deleting an unknown id acknowledges with a count of 0 rather
/// than failing.
///
/// # Errors
///
/// Returns 400 for an id that is not ObjectId-shaped, 500 for a store
/// failure.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>> {
    let id = BookingId::parse(&id)
        .map_err(|e| AppError::BadRequest(format!("invalid booking id: {e}")))?;
    let deleted = BookingRepository::new(state.database()).delete(id).await?;
    Ok(Json(DeleteAck::new(deleted)))
}
