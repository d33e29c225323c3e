//! Provider traits and production implementations.
//!
//! Providers are the network and persistence boundary. Reducers consume them
//! through the environment as opaque async functions; swapping a provider
//! never touches a reducer.

pub mod api;
pub mod credentials;
pub mod snapshot;

pub use api::{AuthSession, HttpApi, OrdersPayload, StorefrontApi, TokenPair};
pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use snapshot::{JsonFileSnapshotStore, Snapshot, SnapshotStore};
