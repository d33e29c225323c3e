//! Personal order history slice.
//!
//! Mirrors the feed slice for the authenticated user's own orders: loaded
//! list, client-side pagination, live channel status, id-keyed cache. No
//! single-order slot; order detail lookups go through the feed.

mod actions;
mod reducer;
pub mod selectors;

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::feed::ChannelStatus;
use crate::types::Order;

pub use actions::HistoryAction;
pub use reducer::HistoryReducer;

/// History slice state.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryState {
    /// The user's loaded orders, upstream order preserved.
    pub orders: Vec<Order>,
    /// Total orders in the user's history, echoed by the upstream.
    pub total_items: u64,
    /// A history fetch is in flight.
    pub loading: bool,
    /// Last fetch or channel error; cleared when the next attempt starts.
    pub error: Option<String>,
    /// Live channel status.
    pub channel: ChannelStatus,
    /// Current page, 1-based.
    pub page: usize,
    /// Orders per page.
    pub page_size: usize,
    /// Id-keyed order cache, populated opportunistically.
    pub cache: HashMap<String, Order>,
    /// When the history list was last replaced.
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            total_items: 0,
            loading: false,
            error: None,
            channel: ChannelStatus::Offline,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            cache: HashMap::new(),
            last_updated: None,
        }
    }
}
