//! Durable catalog/feed snapshot.
//!
//! The catalog and feed slices are persisted after mutations so a restart
//! can render immediately. A snapshot carries its write timestamp; hydration
//! discards snapshots older than the expiry window.

use std::future::Future;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogState;
use crate::constants::SNAPSHOT_TTL_HOURS;
use crate::error::{Result, StorefrontError};
use crate::feed::FeedState;

/// Serialized catalog and feed slices plus the write timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Catalog slice at write time.
    pub catalog: CatalogState,
    /// Feed slice at write time.
    pub feed: FeedState,
    /// When the snapshot was written.
    pub written_at: DateTime<Utc>,
}

impl Snapshot {
    /// Whether the snapshot is still within the expiry window.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.written_at) <= Duration::hours(SNAPSHOT_TTL_HOURS)
    }
}

/// Snapshot persistence boundary.
pub trait SnapshotStore: Send + Sync {
    /// Load the last written snapshot, `None` when nothing was saved yet.
    fn load(&self) -> impl Future<Output = Result<Option<Snapshot>>> + Send;

    /// Persist the snapshot, replacing any previous one.
    fn save(&self, snapshot: &Snapshot) -> impl Future<Output = Result<()>> + Send;
}

/// Snapshot store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    /// Create a store writing to the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self) -> Result<Option<Snapshot>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorefrontError::Persistence(e.to_string())),
        };
        let snapshot =
            serde_json::from_slice(&bytes).map_err(|e| StorefrontError::Persistence(e.to_string()))?;
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let bytes = serde_json::to_vec(snapshot)
            .map_err(|e| StorefrontError::Persistence(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| StorefrontError::Persistence(e.to_string()))
    }
}
