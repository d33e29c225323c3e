//! Scripted credential store mock.

#![allow(clippy::expect_used)] // Mock lock poisoning is a test bug

use std::sync::{Arc, Mutex};

use crate::error::{Result, StorefrontError};
use crate::providers::CredentialStore;

#[derive(Debug, Default)]
struct Inner {
    access: Option<String>,
    refresh: Option<String>,
    fail: bool,
    store_calls: usize,
    clear_calls: usize,
}

/// In-memory [`CredentialStore`] double with failure injection and call
/// counting. Clones share the same pair.
#[derive(Debug, Clone, Default)]
pub struct MockCredentialStore {
    inner: Arc<Mutex<Inner>>,
}

impl MockCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token pair.
    #[must_use]
    pub fn with_tokens(access: &str, refresh: &str) -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            inner.access = Some(access.to_owned());
            inner.refresh = Some(refresh.to_owned());
        }
        store
    }

    /// Make every subsequent operation fail with a persistence error.
    #[must_use]
    pub fn failing(self) -> Self {
        self.lock().fail = true;
        self
    }

    /// How many times `store` was called.
    #[must_use]
    pub fn store_calls(&self) -> usize {
        self.lock().store_calls
    }

    /// How many times `clear` was called.
    #[must_use]
    pub fn clear_calls(&self) -> usize {
        self.lock().clear_calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("mock credential store lock poisoned")
    }

    fn check(inner: &Inner) -> Result<()> {
        if inner.fail {
            Err(StorefrontError::Persistence(
                "mock credential store failure".into(),
            ))
        } else {
            Ok(())
        }
    }
}

impl CredentialStore for MockCredentialStore {
    async fn store(&self, access: &str, refresh: &str) -> Result<()> {
        let mut inner = self.lock();
        inner.store_calls += 1;
        Self::check(&inner)?;
        inner.access = Some(access.to_owned());
        inner.refresh = Some(refresh.to_owned());
        Ok(())
    }

    async fn access_token(&self) -> Result<Option<String>> {
        let inner = self.lock();
        Self::check(&inner)?;
        Ok(inner.access.clone())
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        let inner = self.lock();
        Self::check(&inner)?;
        Ok(inner.refresh.clone())
    }

    async fn clear(&self) -> Result<()> {
        let mut inner = self.lock();
        inner.clear_calls += 1;
        Self::check(&inner)?;
        inner.access = None;
        inner.refresh = None;
        Ok(())
    }
}
