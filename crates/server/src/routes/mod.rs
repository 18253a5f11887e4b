//! HTTP route handlers for the booking server.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                                - Liveness string
//! GET    /health                          - Liveness check
//! GET    /health/ready                    - Readiness check (pings the store)
//!
//! # Catalog
//! GET    /api/v1/services                 - List services
//!                                           (brand, sortField, sortOrder, page, limit)
//!
//! # Bookings
//! POST   /api/v1/user/create-booking      - Insert a booking document verbatim
//! GET    /api/v1/user/bookings            - List bookings for ?email=
//!                                           (requires token cookie)
//! DELETE /api/v1/user/cancel-booking/{id} - Delete a booking by id
//!
//! # Auth
//! POST   /api/v1/auth/access-token        - Sign identity payload, set token cookie
//! ```

pub mod auth;
pub mod bookings;
pub mod services;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new().route("/services", get(services::list_services))
}

/// Create the booking routes router.
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/create-booking", post(bookings::create_booking))
        .route("/bookings", get(bookings::list_bookings))
        .route("/cancel-booking/{id}", delete(bookings::cancel_booking))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/access-token", post(auth::issue_access_token))
}

/// Create all versioned API routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog_routes())
        .nest("/user", booking_routes())
        .nest("/auth", auth_routes())
}
