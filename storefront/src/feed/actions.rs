//! Feed slice actions.

use crate::types::Order;

/// Commands and completion events for the feed slice.
#[derive(Debug, Clone)]
pub enum FeedAction {
    /// Fetch the feed and show the given page.
    FetchPage {
        /// Page to show, 1-based.
        page: usize,
    },
    /// The feed request succeeded.
    FetchSucceeded {
        /// The feed, possibly empty.
        orders: Vec<Order>,
        /// Total orders ever.
        total: u64,
        /// Orders placed today.
        total_today: u64,
    },
    /// The feed request failed.
    FetchFailed {
        /// Error description for display.
        error: String,
    },
    /// Fetch a single order by its human-readable number.
    FetchByNumber {
        /// Order number.
        number: u64,
    },
    /// The single-order request found the order.
    SingleOrderLoaded {
        /// The fetched order.
        order: Order,
    },
    /// The single-order request failed, including the not-found case.
    SingleOrderFailed {
        /// Error description for display.
        error: String,
    },
    /// Reset the single-order slot.
    ClearSingleOrder,
    /// Show a page of the already loaded list.
    SetPage {
        /// Page to show, 1-based.
        page: usize,
    },
    /// Change the page size; the page resets to 1.
    SetPageSize {
        /// Orders per page.
        size: usize,
    },
    /// The live channel started connecting.
    ChannelConnecting,
    /// The live channel is delivering updates.
    ChannelOnline,
    /// The live channel closed.
    ChannelOffline,
    /// The live channel failed.
    ChannelError {
        /// Error description for display.
        message: String,
    },
    /// A live update replacing the feed list.
    ChannelMessage {
        /// The feed, possibly empty.
        orders: Vec<Order>,
        /// Total orders ever.
        total: u64,
        /// Orders placed today.
        total_today: u64,
    },
    /// Drop the order cache and the freshness stamp.
    ClearCache,
    /// Clear the slice error.
    ClearError,
}
