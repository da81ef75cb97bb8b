use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::UserStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Profile persistence, in-memory or PostgreSQL.
    pub store: Arc<dyn UserStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
