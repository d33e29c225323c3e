//! Constructor slice reducer.

use std::marker::PhantomData;

use burgerline_core::effect::Effect;
use burgerline_core::reducer::Reducer;
use burgerline_core::{SmallVec, smallvec};

use crate::environment::StorefrontEnvironment;
use crate::providers::{CredentialStore, SnapshotStore, StorefrontApi};
use crate::selection::{SelectionAction, SelectionState, selectors};
use crate::types::{IngredientKind, PlacedIngredient};

/// Reducer for the constructor slice.
#[derive(Debug, Clone)]
pub struct SelectionReducer<A, C, S> {
    _phantom: PhantomData<(A, C, S)>,
}

impl<A, C, S> SelectionReducer<A, C, S> {
    /// Create the reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<A, C, S> Default for SelectionReducer<A, C, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, C, S> Reducer for SelectionReducer<A, C, S>
where
    A: StorefrontApi + Clone + 'static,
    C: CredentialStore + Clone + 'static,
    S: SnapshotStore + Clone + 'static,
{
    type State = SelectionState;
    type Action = SelectionAction;
    type Environment = StorefrontEnvironment<A, C, S>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SelectionAction::Place { ingredient } => {
                let placed = PlacedIngredient::new(ingredient);
                if placed.ingredient.kind == IngredientKind::Bun {
                    state.bun = Some(placed);
                } else {
                    state.fillings.push(placed);
                }
                smallvec![Effect::None]
            },

            SelectionAction::Remove { instance_id } => {
                state.fillings.retain(|f| f.instance_id != instance_id);
                smallvec![Effect::None]
            },

            SelectionAction::MoveUp { index } => {
                if index > 0 && index < state.fillings.len() {
                    state.fillings.swap(index, index - 1);
                }
                smallvec![Effect::None]
            },

            SelectionAction::MoveDown { index } => {
                if index + 1 < state.fillings.len() {
                    state.fillings.swap(index, index + 1);
                }
                smallvec![Effect::None]
            },

            SelectionAction::Submit => {
                if state.submitting {
                    // Duplicate submit while a request is in flight.
                    tracing::debug!("ignoring submit: already submitting");
                    return smallvec![Effect::None];
                }
                if state.bun.is_none() {
                    state.error = Some("select a bun before submitting an order".into());
                    return smallvec![Effect::None];
                }

                state.error = None;
                state.submitting = true;

                let ids = selectors::ingredient_ids(state);
                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.create_order(ids).await {
                        Ok(order) => Some(SelectionAction::OrderAccepted { order }),
                        Err(e) => Some(SelectionAction::OrderRejected {
                            error: e.to_string(),
                        }),
                    }
                }))]
            },

            SelectionAction::OrderAccepted { order } => {
                state.submitting = false;
                state.accepted_order = Some(order);
                state.bun = None;
                state.fillings.clear();
                smallvec![Effect::None]
            },

            SelectionAction::OrderRejected { error } => {
                state.submitting = false;
                // The selection stays intact so the user can retry.
                state.error = Some(error);
                smallvec![Effect::None]
            },

            SelectionAction::Clear => {
                *state = SelectionState::default();
                smallvec![Effect::None]
            },
        }
    }
}
