//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::SnapshotCache;
use crate::config::ServerConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Registered search snapshots
    pub snapshots: Arc<SnapshotCache>,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state, building the snapshot store from the config.
    pub fn new(config: ServerConfig) -> Self {
        let snapshots = SnapshotCache::new(&config.cache_config());
        Self {
            snapshots: Arc::new(snapshots),
            config: Arc::new(config),
        }
    }
}
