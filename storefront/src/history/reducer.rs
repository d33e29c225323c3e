//! History slice reducer.

use std::marker::PhantomData;

use burgerline_core::effect::Effect;
use burgerline_core::reducer::Reducer;
use burgerline_core::{SmallVec, smallvec};

use crate::environment::StorefrontEnvironment;
use crate::feed::ChannelStatus;
use crate::history::{HistoryAction, HistoryState};
use crate::providers::{CredentialStore, SnapshotStore, StorefrontApi};
use crate::types::Order;

/// Reducer for the history slice.
#[derive(Debug, Clone)]
pub struct HistoryReducer<A, C, S> {
    _phantom: PhantomData<(A, C, S)>,
}

impl<A, C, S> HistoryReducer<A, C, S> {
    /// Create the reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<A, C, S> Default for HistoryReducer<A, C, S> {
    fn default() -> Self {
        Self::new()
    }
}

fn absorb_orders(state: &mut HistoryState, orders: Vec<Order>, total: u64) {
    for order in &orders {
        state.cache.insert(order.id.clone(), order.clone());
    }
    state.orders = orders;
    state.total_items = total;
}

impl<A, C, S> Reducer for HistoryReducer<A, C, S>
where
    A: StorefrontApi + Clone + 'static,
    C: CredentialStore + Clone + 'static,
    S: SnapshotStore + Clone + 'static,
{
    type State = HistoryState;
    type Action = HistoryAction;
    type Environment = StorefrontEnvironment<A, C, S>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            HistoryAction::FetchPage { page } => {
                state.error = None;
                state.loading = true;
                state.page = page;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.fetch_user_orders().await {
                        Ok(payload) => Some(HistoryAction::FetchSucceeded {
                            orders: payload.orders,
                            total: payload.total,
                        }),
                        Err(e) => Some(HistoryAction::FetchFailed {
                            error: e.to_string(),
                        }),
                    }
                }))]
            },

            HistoryAction::FetchSucceeded { orders, total } => {
                state.loading = false;
                // Success always nulls the error, even for an empty list.
                state.error = None;
                absorb_orders(state, orders, total);
                state.last_updated = Some(env.clock.now());
                smallvec![Effect::None]
            },

            HistoryAction::FetchFailed { error } => {
                state.loading = false;
                state.error = Some(error);
                smallvec![Effect::None]
            },

            HistoryAction::SetPage { page } => {
                state.page = page;
                smallvec![Effect::None]
            },

            HistoryAction::SetPageSize { size } => {
                state.page_size = size;
                state.page = 1;
                smallvec![Effect::None]
            },

            HistoryAction::ChannelConnecting => {
                state.channel = ChannelStatus::Connecting;
                smallvec![Effect::None]
            },

            HistoryAction::ChannelOnline => {
                state.channel = ChannelStatus::Online;
                state.error = None;
                smallvec![Effect::None]
            },

            HistoryAction::ChannelOffline => {
                state.channel = ChannelStatus::Offline;
                smallvec![Effect::None]
            },

            HistoryAction::ChannelError { message } => {
                state.channel = ChannelStatus::Offline;
                state.error = Some(message);
                smallvec![Effect::None]
            },

            HistoryAction::ChannelMessage { orders, total } => {
                absorb_orders(state, orders, total);
                state.last_updated = Some(env.clock.now());
                smallvec![Effect::None]
            },

            HistoryAction::ClearCache => {
                state.cache.clear();
                state.last_updated = None;
                smallvec![Effect::None]
            },

            HistoryAction::ClearError => {
                state.error = None;
                smallvec![Effect::None]
            },
        }
    }
}
