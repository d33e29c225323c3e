//! Ingredient catalog slice.
//!
//! Owns the fetched catalog, an id-keyed cache for O(1) lookups, and the
//! detail-view selection. Fetch failures never clear a previously loaded
//! list.

mod actions;
mod reducer;
pub mod selectors;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Ingredient;

pub use actions::CatalogAction;
pub use reducer::CatalogReducer;

/// Catalog slice state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    /// The full fetched catalog, upstream order preserved.
    pub items: Vec<Ingredient>,
    /// A fetch is in flight.
    pub loading: bool,
    /// Last fetch error; cleared when the next attempt starts.
    pub error: Option<String>,
    /// Ingredient shown in the detail view.
    pub selected: Option<Ingredient>,
    /// Id-keyed lookup cache, refreshed on every successful fetch.
    pub cache: HashMap<String, Ingredient>,
    /// When the catalog was last successfully replaced.
    pub last_updated: Option<DateTime<Utc>>,
}
