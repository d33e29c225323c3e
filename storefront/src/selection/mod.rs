//! Burger constructor slice.
//!
//! Owns the in-progress burger: at most one bun plus an ordered filling
//! sequence, each placement individually addressable by instance id. Also
//! owns order submission and its outcome.

mod actions;
mod reducer;
pub mod selectors;

use crate::types::{Order, PlacedIngredient};

pub use actions::SelectionAction;
pub use reducer::SelectionReducer;

/// Constructor slice state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// The chosen bun; placing another bun replaces it entirely.
    pub bun: Option<PlacedIngredient>,
    /// Fillings in assembly order.
    pub fillings: Vec<PlacedIngredient>,
    /// An order submission is in flight.
    pub submitting: bool,
    /// The last accepted order, shown in the confirmation view.
    pub accepted_order: Option<Order>,
    /// Last submission or validation error.
    pub error: Option<String>,
}
