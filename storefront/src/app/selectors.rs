//! Cross-store read functions over the whole state tree.

use crate::app::AppState;
use crate::types::Order;

/// Look up an order by its human-readable number across every store.
///
/// Checked in this order, first match wins:
/// 1. the feed's order cache, then the history's
/// 2. the feed's current list
/// 3. the history's current list
/// 4. the feed's single-order slot
#[must_use]
pub fn order_by_number(state: &AppState, number: u64) -> Option<&Order> {
    state
        .feed
        .cache
        .values()
        .find(|o| o.number == number)
        .or_else(|| state.history.cache.values().find(|o| o.number == number))
        .or_else(|| state.feed.orders.iter().find(|o| o.number == number))
        .or_else(|| state.history.orders.iter().find(|o| o.number == number))
        .or_else(|| {
            state
                .feed
                .single_order
                .as_ref()
                .filter(|o| o.number == number)
        })
}

/// Whether any order list fetch is in flight.
#[must_use]
pub fn any_orders_loading(state: &AppState) -> bool {
    state.feed.loading || state.history.loading
}

/// Every loaded order: feed first, then history. Duplicates allowed.
#[must_use]
pub fn all_orders(state: &AppState) -> Vec<&Order> {
    state
        .feed
        .orders
        .iter()
        .chain(state.history.orders.iter())
        .collect()
}

/// The upstream order totals: `(total, total_today)`.
#[must_use]
pub fn orders_count(state: &AppState) -> (u64, u64) {
    (state.feed.total, state.feed.total_today)
}
