//! Constructor slice actions.

use crate::types::{Ingredient, InstanceId, Order};

/// Commands and completion events for the constructor slice.
#[derive(Debug, Clone)]
pub enum SelectionAction {
    /// Place an ingredient. A bun replaces the current bun; anything else is
    /// appended to the fillings as a fresh placement.
    Place {
        /// The catalog ingredient to place.
        ingredient: Ingredient,
    },
    /// Remove the filling with the given placement id. No-op when absent;
    /// never removes the bun.
    Remove {
        /// Placement to remove.
        instance_id: InstanceId,
    },
    /// Swap the filling at `index` with its predecessor. No-op at index 0.
    MoveUp {
        /// Position in the filling sequence.
        index: usize,
    },
    /// Swap the filling at `index` with its successor. No-op at the last
    /// index.
    MoveDown {
        /// Position in the filling sequence.
        index: usize,
    },
    /// Submit the current burger as an order.
    Submit,
    /// The upstream accepted the order.
    OrderAccepted {
        /// The created order.
        order: Order,
    },
    /// The upstream rejected the order.
    OrderRejected {
        /// Error description for display.
        error: String,
    },
    /// Reset the slice to its initial values. Idempotent.
    Clear,
}
