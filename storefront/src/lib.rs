//! # Burgerline Storefront
//!
//! The client-side state layer of the Burgerline storefront: five domain
//! slices plus a root aggregator, built on the composable reducer
//! architecture of `burgerline-core` and driven by the `burgerline-runtime`
//! store.
//!
//! ## Slices
//!
//! - [`catalog`]: the ingredient catalog, its lookup cache, and the
//!   detail-view selection
//! - [`selection`]: the burger constructor and order submission
//! - [`feed`]: the public order feed, pagination, and the live channel
//! - [`history`]: the authenticated user's order history
//! - [`session`]: authentication state machine and profile
//! - [`app`]: the aggregator composing all five, cross-store selectors, and
//!   snapshot hydration
//!
//! ## Wiring
//!
//! ```ignore
//! use std::sync::Arc;
//! use burgerline_core::environment::SystemClock;
//! use burgerline_runtime::Store;
//! use burgerline_storefront::app::{AppAction, AppReducer, AppState};
//! use burgerline_storefront::catalog::CatalogAction;
//! use burgerline_storefront::environment::StorefrontEnvironment;
//! use burgerline_storefront::providers::{HttpApi, JsonFileSnapshotStore, MemoryCredentialStore};
//!
//! let credentials = MemoryCredentialStore::new();
//! let env = StorefrontEnvironment::new(
//!     HttpApi::new("https://norma.nomoreparties.space/api", credentials.clone()),
//!     credentials,
//!     JsonFileSnapshotStore::new("snapshot.json"),
//!     Arc::new(SystemClock),
//! );
//! let store = Store::new(AppState::default(), AppReducer::new(), env);
//!
//! store.send(AppAction::Hydrate).await?;
//! store.send(AppAction::Catalog(CatalogAction::FetchAll)).await?;
//! ```

pub mod app;
pub mod catalog;
pub mod constants;
pub mod environment;
pub mod error;
pub mod feed;
pub mod history;
pub mod providers;
pub mod selection;
pub mod session;
pub mod types;

mod order_list;

#[cfg(feature = "test-utils")]
pub mod mocks;

#[cfg(test)]
mod test_support;

pub use environment::StorefrontEnvironment;
pub use error::{Result, StorefrontError};
pub use order_list::StatusCounts;
pub use types::{
    Ingredient, IngredientKind, InstanceId, Order, OrderStatus, PlacedIngredient, ProfileUpdate,
    User,
};
