//! Mock providers for tests.
//!
//! Every provider trait has a scripted in-memory double here. Enabled by the
//! `test-utils` feature (on by default) so downstream crates can drive real
//! stores without a network.

mod api;
mod credentials;
mod snapshots;

pub use api::MockApi;
pub use credentials::MockCredentialStore;
pub use snapshots::MockSnapshotStore;
