//! Snapshot store for registered searches.
//!
//! A search's itineraries are converted and their facets derived once, on
//! registration. Every later filter or sort change reads the same immutable
//! snapshot by id. Entries expire after a TTL so abandoned searches don't
//! accumulate.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use uuid::Uuid;

use crate::domain::Itinerary;
use crate::results::Snapshot;

/// Configuration for the snapshot store.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for stored snapshots.
    pub ttl: Duration,

    /// Maximum number of stored snapshots.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Store of search snapshots keyed by search id.
pub struct SnapshotCache {
    snapshots: MokaCache<Uuid, Arc<Snapshot>>,
}

impl SnapshotCache {
    /// Create a new store with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let snapshots = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { snapshots }
    }

    /// Register a search's itineraries and return its id.
    pub async fn insert(&self, itineraries: Vec<Itinerary>) -> (Uuid, Arc<Snapshot>) {
        let id = Uuid::new_v4();
        let snapshot = Arc::new(Snapshot::new(itineraries));
        self.snapshots.insert(id, snapshot.clone()).await;
        (id, snapshot)
    }

    /// Get a snapshot, if it hasn't expired.
    pub async fn get(&self, id: &Uuid) -> Option<Arc<Snapshot>> {
        self.snapshots.get(id).await
    }

    /// Get cache statistics (for monitoring).
    ///
    /// Moka updates this lazily; it may lag recent inserts.
    pub fn entry_count(&self) -> u64 {
        self.snapshots.entry_count()
    }

    /// Invalidate all stored snapshots.
    pub fn invalidate_all(&self) {
        self.snapshots.invalidate_all();
    }
}
