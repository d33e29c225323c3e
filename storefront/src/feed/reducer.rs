//! Feed slice reducer.

use std::marker::PhantomData;

use burgerline_core::effect::Effect;
use burgerline_core::reducer::Reducer;
use burgerline_core::{SmallVec, smallvec};

use crate::environment::StorefrontEnvironment;
use crate::feed::{ChannelStatus, FeedAction, FeedState};
use crate::providers::{CredentialStore, SnapshotStore, StorefrontApi};
use crate::types::Order;

/// Reducer for the feed slice.
#[derive(Debug, Clone)]
pub struct FeedReducer<A, C, S> {
    _phantom: PhantomData<(A, C, S)>,
}

impl<A, C, S> FeedReducer<A, C, S> {
    /// Create the reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<A, C, S> Default for FeedReducer<A, C, S> {
    fn default() -> Self {
        Self::new()
    }
}

fn absorb_orders(state: &mut FeedState, orders: Vec<Order>, total: u64, total_today: u64) {
    for order in &orders {
        state.cache.insert(order.id.clone(), order.clone());
    }
    state.orders = orders;
    state.total = total;
    state.total_today = total_today;
}

impl<A, C, S> Reducer for FeedReducer<A, C, S>
where
    A: StorefrontApi + Clone + 'static,
    C: CredentialStore + Clone + 'static,
    S: SnapshotStore + Clone + 'static,
{
    type State = FeedState;
    type Action = FeedAction;
    type Environment = StorefrontEnvironment<A, C, S>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            FeedAction::FetchPage { page } => {
                state.error = None;
                state.loading = true;
                state.page = page;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.fetch_feed().await {
                        Ok(payload) => Some(FeedAction::FetchSucceeded {
                            orders: payload.orders,
                            total: payload.total,
                            total_today: payload.total_today,
                        }),
                        Err(e) => Some(FeedAction::FetchFailed {
                            error: e.to_string(),
                        }),
                    }
                }))]
            },

            FeedAction::FetchSucceeded {
                orders,
                total,
                total_today,
            } => {
                state.loading = false;
                // Success always nulls the error, even for an empty list.
                state.error = None;
                absorb_orders(state, orders, total, total_today);
                state.last_updated = Some(env.clock.now());
                smallvec![Effect::None]
            },

            FeedAction::FetchFailed { error } => {
                state.loading = false;
                // The previously loaded list stays untouched.
                state.error = Some(error);
                smallvec![Effect::None]
            },

            FeedAction::FetchByNumber { number } => {
                state.error = None;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.fetch_order_by_number(number).await {
                        Ok(order) => Some(FeedAction::SingleOrderLoaded { order }),
                        Err(e) => Some(FeedAction::SingleOrderFailed {
                            error: e.to_string(),
                        }),
                    }
                }))]
            },

            FeedAction::SingleOrderLoaded { order } => {
                state.cache.insert(order.id.clone(), order.clone());
                state.single_order = Some(order);
                smallvec![Effect::None]
            },

            FeedAction::SingleOrderFailed { error } => {
                state.error = Some(error);
                smallvec![Effect::None]
            },

            FeedAction::ClearSingleOrder => {
                state.single_order = None;
                smallvec![Effect::None]
            },

            FeedAction::SetPage { page } => {
                state.page = page;
                smallvec![Effect::None]
            },

            FeedAction::SetPageSize { size } => {
                state.page_size = size;
                state.page = 1;
                smallvec![Effect::None]
            },

            FeedAction::ChannelConnecting => {
                state.channel = ChannelStatus::Connecting;
                smallvec![Effect::None]
            },

            FeedAction::ChannelOnline => {
                state.channel = ChannelStatus::Online;
                state.error = None;
                smallvec![Effect::None]
            },

            FeedAction::ChannelOffline => {
                state.channel = ChannelStatus::Offline;
                smallvec![Effect::None]
            },

            FeedAction::ChannelError { message } => {
                state.channel = ChannelStatus::Offline;
                state.error = Some(message);
                smallvec![Effect::None]
            },

            FeedAction::ChannelMessage {
                orders,
                total,
                total_today,
            } => {
                absorb_orders(state, orders, total, total_today);
                state.last_updated = Some(env.clock.now());
                smallvec![Effect::None]
            },

            FeedAction::ClearCache => {
                state.cache.clear();
                state.last_updated = None;
                smallvec![Effect::None]
            },

            FeedAction::ClearError => {
                state.error = None;
                smallvec![Effect::None]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockApi, MockCredentialStore, MockSnapshotStore};
    use crate::test_support::{now, order, test_env};
    use crate::types::OrderStatus;
    use burgerline_testing::{ReducerTest, assertions};

    type TestReducer = FeedReducer<MockApi, MockCredentialStore, MockSnapshotStore>;

    #[test]
    fn fetch_page_clears_error_and_moves_to_the_requested_page() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(FeedState {
                error: Some("stale".into()),
                ..FeedState::default()
            })
            .when_action(FeedAction::FetchPage { page: 3 })
            .then_state(|state| {
                assert!(state.loading);
                assert!(state.error.is_none());
                assert_eq!(state.page, 3);
            })
            .then_effects(assertions::assert_has_future_effect)
            .run();
    }

    #[test]
    fn empty_fetch_success_still_nulls_the_error() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(FeedState {
                error: Some("stale".into()),
                loading: true,
                ..FeedState::default()
            })
            .when_action(FeedAction::FetchSucceeded {
                orders: vec![],
                total: 100,
                total_today: 7,
            })
            .then_state(|state| {
                assert!(!state.loading);
                assert!(state.error.is_none());
                assert_eq!(state.total, 100);
                assert_eq!(state.total_today, 7);
                assert_eq!(state.last_updated, Some(now()));
            })
            .run();
    }

    #[test]
    fn fetch_success_populates_the_cache() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(FeedState::default())
            .when_action(FeedAction::FetchSucceeded {
                orders: vec![
                    order("o1", 1, OrderStatus::Done, 1),
                    order("o2", 2, OrderStatus::Pending, 2),
                ],
                total: 2,
                total_today: 2,
            })
            .then_state(|state| {
                assert_eq!(state.orders.len(), 2);
                assert!(state.cache.contains_key("o1"));
                assert!(state.cache.contains_key("o2"));
            })
            .run();
    }

    #[test]
    fn fetch_failure_keeps_loaded_orders() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(FeedState {
                orders: vec![order("o1", 1, OrderStatus::Done, 1)],
                loading: true,
                ..FeedState::default()
            })
            .when_action(FeedAction::FetchFailed {
                error: "transport failure: timeout".into(),
            })
            .then_state(|state| {
                assert!(!state.loading);
                assert!(state.error.is_some());
                assert_eq!(state.orders.len(), 1);
            })
            .run();
    }

    #[test]
    fn page_size_change_resets_the_page() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(FeedState {
                page: 5,
                ..FeedState::default()
            })
            .when_action(FeedAction::SetPageSize { size: 25 })
            .then_state(|state| {
                assert_eq!(state.page_size, 25);
                assert_eq!(state.page, 1);
            })
            .run();
    }

    #[test]
    fn channel_transitions_track_status_and_error() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(FeedState::default())
            .when_action(FeedAction::ChannelConnecting)
            .then_state(|s| assert_eq!(s.channel, ChannelStatus::Connecting))
            .run();

        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(FeedState {
                channel: ChannelStatus::Connecting,
                error: Some("stale".into()),
                ..FeedState::default()
            })
            .when_action(FeedAction::ChannelOnline)
            .then_state(|s| {
                assert_eq!(s.channel, ChannelStatus::Online);
                assert!(s.error.is_none());
            })
            .run();

        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(FeedState {
                channel: ChannelStatus::Online,
                ..FeedState::default()
            })
            .when_action(FeedAction::ChannelError {
                message: "socket closed".into(),
            })
            .then_state(|s| {
                assert_eq!(s.channel, ChannelStatus::Offline);
                assert_eq!(s.error.as_deref(), Some("socket closed"));
            })
            .run();
    }

    #[test]
    fn channel_message_replaces_the_list() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(FeedState {
                orders: vec![order("o1", 1, OrderStatus::Done, 1)],
                ..FeedState::default()
            })
            .when_action(FeedAction::ChannelMessage {
                orders: vec![
                    order("o2", 2, OrderStatus::Created, 2),
                    order("o3", 3, OrderStatus::Created, 3),
                ],
                total: 3,
                total_today: 3,
            })
            .then_state(|state| {
                assert_eq!(state.orders.len(), 2);
                assert_eq!(state.total, 3);
                // Replaced out of the list, but still in the cache.
                assert!(state.cache.contains_key("o2"));
                assert_eq!(state.last_updated, Some(now()));
            })
            .run();
    }

    #[test]
    fn single_order_fills_the_slot_and_the_cache() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(FeedState::default())
            .when_action(FeedAction::SingleOrderLoaded {
                order: order("o9", 99, OrderStatus::Pending, 4),
            })
            .then_state(|state| {
                assert_eq!(state.single_order.as_ref().map(|o| o.number), Some(99));
                assert!(state.cache.contains_key("o9"));
            })
            .run();
    }

    #[test]
    fn clear_single_order_resets_the_slot() {
        ReducerTest::new(TestReducer::new())
            .with_env(test_env())
            .given_state(FeedState {
                single_order: Some(order("o9", 99, OrderStatus::Pending, 4)),
                ..FeedState::default()
            })
            .when_action(FeedAction::ClearSingleOrder)
            .then_state(|state| assert!(state.single_order.is_none()))
            .run();
    }
}
