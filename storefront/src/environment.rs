//! Storefront environment.
//!
//! Bundles every external dependency the slice reducers need. There are no
//! ambient singletons: the composition root builds one environment and hands
//! it to the store.

use std::sync::Arc;

use burgerline_core::environment::Clock;

use crate::providers::{CredentialStore, SnapshotStore, StorefrontApi};

/// Injected dependencies for all storefront reducers.
///
/// # Type Parameters
///
/// - `A`: API client
/// - `C`: credential store
/// - `S`: snapshot store
#[derive(Clone)]
pub struct StorefrontEnvironment<A, C, S>
where
    A: StorefrontApi + Clone,
    C: CredentialStore + Clone,
    S: SnapshotStore + Clone,
{
    /// Upstream REST API client.
    pub api: A,

    /// Token pair persistence.
    pub credentials: C,

    /// Catalog/feed snapshot persistence.
    pub snapshots: S,

    /// Time source; a fixed clock in tests.
    pub clock: Arc<dyn Clock>,
}

impl<A, C, S> StorefrontEnvironment<A, C, S>
where
    A: StorefrontApi + Clone,
    C: CredentialStore + Clone,
    S: SnapshotStore + Clone,
{
    /// Bundle the given providers into an environment.
    #[must_use]
    pub fn new(api: A, credentials: C, snapshots: S, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            credentials,
            snapshots,
            clock,
        }
    }
}
