//! Pure read functions over the history slice.

use crate::history::HistoryState;
use crate::order_list;
use crate::types::{Order, OrderStatus};

pub use crate::order_list::StatusCounts;

/// Orders with the given status, list order preserved.
#[must_use]
pub fn by_status(state: &HistoryState, status: OrderStatus) -> Vec<&Order> {
    order_list::by_status(&state.orders, status)
}

/// The window of the loaded list covered by the current page.
#[must_use]
pub fn page_slice(state: &HistoryState) -> &[Order] {
    order_list::page_slice(&state.orders, state.page, state.page_size)
}

/// Most recent `n` orders, descending `created_at` with stable ties.
#[must_use]
pub fn recent(state: &HistoryState, n: usize) -> Vec<&Order> {
    order_list::recent(&state.orders, n)
}

/// Per-status totals over the loaded list.
#[must_use]
pub fn status_counts(state: &HistoryState) -> StatusCounts {
    order_list::status_counts(&state.orders)
}

/// Number of pages needed for the loaded list.
#[must_use]
pub fn total_pages(state: &HistoryState) -> usize {
    order_list::total_pages(state.orders.len(), state.page_size)
}

/// Cached order by upstream id.
#[must_use]
pub fn from_cache<'a>(state: &'a HistoryState, id: &str) -> Option<&'a Order> {
    state.cache.get(id)
}
