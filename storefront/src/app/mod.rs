//! Root aggregator.
//!
//! Composes the five slices into one state tree and one action enum, with a
//! single reducer delegating to the slice reducers. Also owns the durable
//! catalog/feed snapshot and startup hydration.

mod actions;
mod reducer;
pub mod selectors;

use crate::catalog::CatalogState;
use crate::feed::FeedState;
use crate::history::HistoryState;
use crate::selection::SelectionState;
use crate::session::SessionState;

pub use actions::AppAction;
pub use reducer::AppReducer;

/// The whole client state tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Ingredient catalog.
    pub catalog: CatalogState,
    /// Burger constructor.
    pub selection: SelectionState,
    /// Public order feed.
    pub feed: FeedState,
    /// Personal order history.
    pub history: HistoryState,
    /// User session.
    pub session: SessionState,
}
