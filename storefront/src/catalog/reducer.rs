//! Catalog slice reducer.

use std::marker::PhantomData;

use burgerline_core::effect::Effect;
use burgerline_core::reducer::Reducer;
use burgerline_core::{SmallVec, smallvec};

use crate::catalog::{CatalogAction, CatalogState};
use crate::environment::StorefrontEnvironment;
use crate::providers::{CredentialStore, SnapshotStore, StorefrontApi};

/// Reducer for the catalog slice.
#[derive(Debug, Clone)]
pub struct CatalogReducer<A, C, S> {
    _phantom: PhantomData<(A, C, S)>,
}

impl<A, C, S> CatalogReducer<A, C, S> {
    /// Create the reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<A, C, S> Default for CatalogReducer<A, C, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, C, S> Reducer for CatalogReducer<A, C, S>
where
    A: StorefrontApi + Clone + 'static,
    C: CredentialStore + Clone + 'static,
    S: SnapshotStore + Clone + 'static,
{
    type State = CatalogState;
    type Action = CatalogAction;
    type Environment = StorefrontEnvironment<A, C, S>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CatalogAction::FetchAll => {
                state.error = None;
                state.loading = true;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.fetch_ingredients().await {
                        Ok(items) => Some(CatalogAction::FetchSucceeded { items }),
                        Err(e) => Some(CatalogAction::FetchFailed {
                            error: e.to_string(),
                        }),
                    }
                }))]
            },

            CatalogAction::FetchSucceeded { items } => {
                state.loading = false;
                // Success always nulls the error, even for an empty list.
                state.error = None;
                state.cache = items
                    .iter()
                    .map(|item| (item.id.clone(), item.clone()))
                    .collect();
                state.items = items;
                state.last_updated = Some(env.clock.now());
                smallvec![Effect::None]
            },

            CatalogAction::FetchFailed { error } => {
                state.loading = false;
                // Previously loaded items stay untouched.
                state.error = Some(error);
                smallvec![Effect::None]
            },

            CatalogAction::Select { id } => {
                state.selected = state.cache.get(&id).cloned();
                smallvec![Effect::None]
            },

            CatalogAction::ClearSelection => {
                state.selected = None;
                smallvec![Effect::None]
            },

            CatalogAction::ClearCache => {
                state.cache.clear();
                state.last_updated = None;
                smallvec![Effect::None]
            },

            CatalogAction::ClearError => {
                state.error = None;
                smallvec![Effect::None]
            },
        }
    }
}
