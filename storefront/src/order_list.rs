//! Shared read helpers over order lists.
//!
//! The feed and history slices expose the same set of selectors; both
//! delegate to these helpers.

use crate::types::{Order, OrderStatus};

/// Per-status order totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Orders in `Created`.
    pub created: usize,
    /// Orders in `Pending`.
    pub pending: usize,
    /// Orders in `Done`.
    pub done: usize,
}

pub(crate) fn by_status(orders: &[Order], status: OrderStatus) -> Vec<&Order> {
    orders.iter().filter(|o| o.status == status).collect()
}

/// Most recent `n` orders, descending `created_at`. Stable: ties keep their
/// original relative position.
pub(crate) fn recent(orders: &[Order], n: usize) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}

pub(crate) fn status_counts(orders: &[Order]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for order in orders {
        match order.status {
            OrderStatus::Created => counts.created += 1,
            OrderStatus::Pending => counts.pending += 1,
            OrderStatus::Done => counts.done += 1,
        }
    }
    counts
}

/// The window of the loaded list covered by the current page (1-based).
pub(crate) fn page_slice(orders: &[Order], page: usize, page_size: usize) -> &[Order] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(orders.len());
    orders.get(start..end).unwrap_or(&[])
}

/// Number of pages needed for the loaded list.
pub(crate) fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        len.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(id: &str, status: OrderStatus, minute: u32) -> Order {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 1, 12, minute, 0)
            .single()
            .unwrap_or_default();
        Order {
            id: id.into(),
            number: 1,
            name: id.into(),
            status,
            created_at: at,
            updated_at: at,
            ingredients: vec![],
        }
    }

    #[test]
    fn recent_is_descending_and_stable_on_ties() {
        let orders = vec![
            order("a", OrderStatus::Done, 5),
            order("b", OrderStatus::Done, 10),
            order("c", OrderStatus::Done, 5),
        ];
        let top: Vec<&str> = recent(&orders, 3).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(top, ["b", "a", "c"]);
    }

    #[test]
    fn page_slice_clamps_to_list_bounds() {
        let orders: Vec<Order> = (0u32..5)
            .map(|i| order(&format!("o{i}"), OrderStatus::Pending, i))
            .collect();
        assert_eq!(page_slice(&orders, 1, 2).len(), 2);
        assert_eq!(page_slice(&orders, 3, 2).len(), 1);
        assert_eq!(page_slice(&orders, 4, 2).len(), 0);
        assert_eq!(page_slice(&orders, 0, 2).len(), 0);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn status_counts_cover_every_status() {
        let orders = vec![
            order("a", OrderStatus::Created, 1),
            order("b", OrderStatus::Pending, 2),
            order("c", OrderStatus::Done, 3),
            order("d", OrderStatus::Done, 4),
        ];
        let counts = status_counts(&orders);
        assert_eq!(counts.created, 1);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.done, 2);
    }
}
