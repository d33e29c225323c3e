//! History slice actions.

use crate::types::Order;

/// Commands and completion events for the history slice.
#[derive(Debug, Clone)]
pub enum HistoryAction {
    /// Fetch the user's orders and show the given page.
    FetchPage {
        /// Page to show, 1-based.
        page: usize,
    },
    /// The history request succeeded.
    FetchSucceeded {
        /// The user's orders, possibly empty.
        orders: Vec<Order>,
        /// Total orders in the user's history.
        total: u64,
    },
    /// The history request failed.
    FetchFailed {
        /// Error description for display.
        error: String,
    },
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
    /// A live update replacing the history list.
    ChannelMessage {
        /// The user's orders, possibly empty.
        orders: Vec<Order>,
        /// Total orders in the user's history.
        total: u64,
    },
    /// Drop the order cache and the freshness stamp.
    ClearCache,
    /// Clear the slice error.
    ClearError,
}
