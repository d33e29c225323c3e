//! Public order feed slice.
//!
//! Owns the public feed list, client-side pagination, the live channel
//! status, an id-keyed order cache, and a slot for the last single order
//! fetched by number.

mod actions;
mod reducer;
pub mod selectors;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::types::Order;

pub use actions::FeedAction;
pub use reducer::FeedReducer;

/// Live order channel status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelStatus {
    /// Connection attempt in progress.
    Connecting,
    /// Receiving live updates.
    Online,
    /// Not connected.
    #[default]
    Offline,
}

/// Feed slice state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedState {
    /// The loaded feed, upstream order preserved (most recent first).
    pub orders: Vec<Order>,
    /// Total orders ever, echoed by the upstream.
    pub total: u64,
    /// Orders placed today, echoed by the upstream.
    pub total_today: u64,
    /// A feed fetch is in flight.
    pub loading: bool,
    /// Last fetch or channel error; cleared when the next attempt starts.
    pub error: Option<String>,
    /// Last single order fetched by number.
    pub single_order: Option<Order>,
    /// Live channel status.
    pub channel: ChannelStatus,
    /// Current page, 1-based.
    pub page: usize,
    /// Orders per page.
    pub page_size: usize,
    /// Id-keyed order cache, populated opportunistically.
    pub cache: HashMap<String, Order>,
    /// When the feed list was last replaced.
    pub last_updated: Option<DateTime<Utc>>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            total: 0,
            total_today: 0,
            loading: false,
            error: None,
            single_order: None,
            channel: ChannelStatus::Offline,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            cache: HashMap::new(),
            last_updated: None,
        }
    }
}
