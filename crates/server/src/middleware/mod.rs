//! HTTP middleware and extractors for the booking server.
//!
//! The only gate in the pipeline is credential verification: protected
//! handlers take the [`RequireIdentity`] extractor, which rejects with 401
//! before the handler body ever runs. CORS and tracing layers are applied
//! at router assembly in the crate root.

pub mod auth;

pub use auth::{RequireIdentity, TOKEN_COOKIE};
