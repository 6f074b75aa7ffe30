use std::sync::Arc;

use catalog_core::store::EntryStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The configured entry store backend.
    pub store: Arc<dyn EntryStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
