//! Catalog slice actions.

use crate::types::Ingredient;

/// Commands and completion events for the catalog slice.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Fetch the full catalog. Concurrent calls are not de-duplicated; the
    /// last response wins.
    FetchAll,
    /// The catalog request succeeded.
    FetchSucceeded {
        /// The fetched catalog, possibly empty.
        items: Vec<Ingredient>,
    },
    /// The catalog request failed.
    FetchFailed {
        /// Error description for display.
        error: String,
    },
    /// Select an ingredient for the detail view, resolved from the cache.
    Select {
        /// Catalog id.
        id: String,
    },
    /// Clear the detail-view selection.
    ClearSelection,
    /// Drop the lookup cache and the freshness stamp.
    ClearCache,
    /// Clear the slice error.
    ClearError,
}
