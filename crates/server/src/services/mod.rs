//! Business logic services for the booking server.
//!
//! # Services
//!
//! - `auth` - Access-token issuing and verification

pub mod auth;

pub use auth::{AuthError, Identity};
