//! Credential persistence.
//!
//! The access token is short-lived (the cookie analogue); the refresh token
//! is durable. They are always stored and cleared as a pair.

use std::future::Future;
use std::sync::{Arc, RwLock};

use crate::error::{Result, StorefrontError};

/// Token pair persistence boundary.
pub trait CredentialStore: Send + Sync {
    /// Store both tokens, replacing any previous pair.
    fn store(&self, access: &str, refresh: &str) -> impl Future<Output = Result<()>> + Send;

    /// The stored access token, if any.
    fn access_token(&self) -> impl Future<Output = Result<Option<String>>> + Send;

    /// The stored refresh token, if any.
    fn refresh_token(&self) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Drop both tokens.
    fn clear(&self) -> impl Future<Output = Result<()>> + Send;
}

#[derive(Debug, Default)]
struct Tokens {
    access: Option<String>,
    refresh: Option<String>,
}

/// In-memory credential store.
///
/// Clones share the same underlying pair, so the store can be handed to both
/// the environment and the API client.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    tokens: Arc<RwLock<Tokens>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tokens>> {
        self.tokens
            .read()
            .map_err(|_| StorefrontError::Persistence("credential store lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tokens>> {
        self.tokens
            .write()
            .map_err(|_| StorefrontError::Persistence("credential store lock poisoned".into()))
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn store(&self, access: &str, refresh: &str) -> Result<()> {
        let mut tokens = self.write()?;
        tokens.access = Some(access.to_owned());
        tokens.refresh = Some(refresh.to_owned());
        Ok(())
    }

    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.read()?.access.clone())
    }

    async fn refresh_token(&self) -> Result<Option<String>> {
        Ok(self.read()?.refresh.clone())
    }

    async fn clear(&self) -> Result<()> {
        let mut tokens = self.write()?;
        tokens.access = None;
        tokens.refresh = None;
        Ok(())
    }
}
