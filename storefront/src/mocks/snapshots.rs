//! Scripted snapshot store mock.

#![allow(clippy::expect_used)] // Mock lock poisoning is a test bug

use std::sync::{Arc, Mutex};

use crate::error::{Result, StorefrontError};
use crate::providers::{Snapshot, SnapshotStore};

#[derive(Debug, Default)]
struct Inner {
    snapshot: Option<Snapshot>,
    fail: bool,
    save_calls: usize,
}

/// In-memory [`SnapshotStore`] double with failure injection. Clones share
/// the same stored snapshot.
#[derive(Debug, Clone, Default)]
pub struct MockSnapshotStore {
    inner: Arc<Mutex<Inner>>,
}

impl MockSnapshotStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a snapshot.
    #[must_use]
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let store = Self::new();
        store.lock().snapshot = Some(snapshot);
        store
    }

    /// Make every subsequent operation fail with a persistence error.
    #[must_use]
    pub fn failing(self) -> Self {
        self.lock().fail = true;
        self
    }

    /// The currently stored snapshot.
    #[must_use]
    pub fn stored(&self) -> Option<Snapshot> {
        self.lock().snapshot.clone()
    }

    /// How many times `save` was called.
    #[must_use]
    pub fn save_calls(&self) -> usize {
        self.lock().save_calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("mock snapshot store lock poisoned")
    }
}

impl SnapshotStore for MockSnapshotStore {
    async fn load(&self) -> Result<Option<Snapshot>> {
        let inner = self.lock();
        if inner.fail {
            return Err(StorefrontError::Persistence("mock snapshot load failure".into()));
        }
        Ok(inner.snapshot.clone())
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let mut inner = self.lock();
        inner.save_calls += 1;
        if inner.fail {
            return Err(StorefrontError::Persistence("mock snapshot save failure".into()));
        }
        inner.snapshot = Some(snapshot.clone());
        Ok(())
    }
}
