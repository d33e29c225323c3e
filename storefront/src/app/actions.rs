//! Root action enum.

use crate::catalog::CatalogAction;
use crate::feed::FeedAction;
use crate::history::HistoryAction;
use crate::providers::Snapshot;
use crate::selection::SelectionAction;
use crate::session::SessionAction;

/// One action type over the whole state tree, wrapping each slice's actions.
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Catalog slice action.
    Catalog(CatalogAction),
    /// Constructor slice action.
    Selection(SelectionAction),
    /// Feed slice action.
    Feed(FeedAction),
    /// History slice action.
    History(HistoryAction),
    /// Session slice action.
    Session(SessionAction),
    /// Load the persisted snapshot at startup.
    Hydrate,
    /// A snapshot was loaded; applied only while still fresh.
    Hydrated {
        /// The loaded snapshot.
        snapshot: Snapshot,
    },
}
