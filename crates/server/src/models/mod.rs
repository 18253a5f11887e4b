//! Wire and domain models for the booking server.
//!
//! # Models
//!
//! - `service` - Typed catalog projection
//! - `booking` - Typed booking projection and store acknowledgments
//! - `catalog` - Validated catalog query selection

pub mod booking;
pub mod catalog;
pub mod service;

pub use booking::{Booking, DeleteAck, InsertAck};
pub use catalog::{CatalogPage, CatalogParamError, CatalogSelection, PageRequest, SortOrder, SortSpec};
pub use service::Service;
