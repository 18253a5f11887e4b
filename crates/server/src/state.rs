//! Application state shared across handlers.

use std::sync::Arc;

use mongodb::Database;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the injected store handle. The store client is
/// constructed once at startup and passed in here; handlers never reach for
/// a module-level global.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    database: Database,
}

impl AppState {
    /// Create a new application state around an injected store handle.
    #[must_use]
    pub fn new(config: ServerConfig, database: Database) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, database }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the store database handle.
    #[must_use]
    pub fn database(&self) -> &Database {
        &self.inner.database
    }
}
