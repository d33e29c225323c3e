//! End-to-end flows through a real store with mock providers.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use burgerline_core::environment::FixedClock;
use burgerline_runtime::Store;
use burgerline_storefront::app::{AppAction, AppReducer, AppState, selectors};
use burgerline_storefront::catalog::CatalogAction;
use burgerline_storefront::environment::StorefrontEnvironment;
use burgerline_storefront::feed::FeedAction;
use burgerline_storefront::mocks::{MockApi, MockCredentialStore, MockSnapshotStore};
use burgerline_storefront::providers::{AuthSession, OrdersPayload, Snapshot};
use burgerline_storefront::selection::SelectionAction;
use burgerline_storefront::session::{AuthStatus, SessionAction};
use burgerline_storefront::{
    Ingredient, IngredientKind, Order, OrderStatus, StorefrontError, User,
};
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};

type TestStore = Store<
    AppState,
    AppAction,
    StorefrontEnvironment<MockApi, MockCredentialStore, MockSnapshotStore>,
    AppReducer<MockApi, MockCredentialStore, MockSnapshotStore>,
>;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().unwrap()
}

fn store_with(
    api: MockApi,
    credentials: MockCredentialStore,
    snapshots: MockSnapshotStore,
) -> TestStore {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let env = StorefrontEnvironment::new(api, credentials, snapshots, Arc::new(FixedClock(now())));
    Store::new(AppState::default(), AppReducer::new(), env)
}

fn ingredient(id: &str, kind: IngredientKind, price: u32) -> Ingredient {
    Ingredient {
        id: id.into(),
        name: format!("Ingredient {id}"),
        kind,
        proteins: 10,
        fat: 5,
        carbohydrates: 20,
        calories: 100,
        price,
        image: String::new(),
        image_mobile: String::new(),
        image_large: String::new(),
    }
}

fn order(id: &str, number: u64) -> Order {
    Order {
        id: id.into(),
        number,
        name: format!("Order {number}"),
        status: OrderStatus::Created,
        created_at: now(),
        updated_at: now(),
        ingredients: vec!["b1".into(), "m1".into(), "b1".into()],
    }
}

fn profile() -> User {
    User {
        name: "Ada".into(),
        email: "ada@example.test".into(),
        created_at: None,
        updated_at: None,
    }
}

/// Poll until the state satisfies the predicate. Feedback actions are
/// broadcast before they are reduced, so a matching broadcast does not yet
/// guarantee the state change is visible.
async fn wait_for_state<F>(store: &TestStore, predicate: F)
where
    F: Fn(&AppState) -> bool,
{
    for _ in 0..100 {
        if store.state(&predicate).await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("state predicate not satisfied within the deadline");
}

#[tokio::test]
async fn catalog_fetch_populates_items_and_writes_a_snapshot() {
    let api = MockApi::new().with_ingredients(Ok(vec![
        ingredient("b1", IngredientKind::Bun, 100),
        ingredient("m1", IngredientKind::Main, 50),
    ]));
    let snapshots = MockSnapshotStore::new();
    let store = store_with(api, MockCredentialStore::new(), snapshots.clone());

    store
        .send_and_wait_for(
            AppAction::Catalog(CatalogAction::FetchAll),
            |a| matches!(a, AppAction::Catalog(CatalogAction::FetchSucceeded { .. })),
            Duration::from_secs(1),
        )
        .await
        .expect("fetch completion");

    wait_for_state(&store, |s| s.catalog.items.len() == 2).await;
    wait_for_state(&store, |s| !s.catalog.loading).await;

    // The feedback action itself schedules the snapshot write.
    for _ in 0..100 {
        let snap = snapshots.stored();
        if snap.as_ref().is_some_and(|s| s.catalog.items.len() == 2) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("snapshot was not written with the fetched catalog");
}

#[tokio::test]
async fn catalog_fetch_failure_surfaces_the_error_string() {
    let api = MockApi::new()
        .with_ingredients(Err(StorefrontError::Transport("connection refused".into())));
    let store = store_with(api, MockCredentialStore::new(), MockSnapshotStore::new());

    store
        .send(AppAction::Catalog(CatalogAction::FetchAll))
        .await
        .expect("send");

    wait_for_state(&store, |s| {
        s.catalog.error.as_deref() == Some("transport failure: connection refused")
    })
    .await;
}

#[tokio::test]
async fn order_submission_round_trip_empties_the_constructor() {
    let api = MockApi::new().with_created_order(Ok(order("o1", 777)));
    let store = store_with(api.clone(), MockCredentialStore::new(), MockSnapshotStore::new());

    store
        .send(AppAction::Selection(SelectionAction::Place {
            ingredient: ingredient("b1", IngredientKind::Bun, 100),
        }))
        .await
        .expect("place bun");
    store
        .send(AppAction::Selection(SelectionAction::Place {
            ingredient: ingredient("m1", IngredientKind::Main, 50),
        }))
        .await
        .expect("place filling");

    store
        .send_and_wait_for(
            AppAction::Selection(SelectionAction::Submit),
            |a| matches!(a, AppAction::Selection(SelectionAction::OrderAccepted { .. })),
            Duration::from_secs(1),
        )
        .await
        .expect("submission completion");

    wait_for_state(&store, |s| {
        s.selection.accepted_order.as_ref().map(|o| o.number) == Some(777)
            && s.selection.bun.is_none()
            && s.selection.fillings.is_empty()
    })
    .await;

    // The submitted sequence frames the fillings with the bun id.
    assert_eq!(api.submitted_orders(), vec![vec![
        "b1".to_string(),
        "m1".to_string(),
        "b1".to_string()
    ]]);
}

#[tokio::test]
async fn login_stores_tokens_and_authenticates() {
    let credentials = MockCredentialStore::new();
    let api = MockApi::new().with_session(Ok(AuthSession {
        user: profile(),
        access_token: "access-1".into(),
        refresh_token: "refresh-1".into(),
    }));
    let store = store_with(api, credentials.clone(), MockSnapshotStore::new());

    store
        .send_and_wait_for(
            AppAction::Session(SessionAction::Login {
                email: "ada@example.test".into(),
                password: "hunter2".into(),
            }),
            |a| matches!(a, AppAction::Session(SessionAction::SignInSucceeded { .. })),
            Duration::from_secs(1),
        )
        .await
        .expect("login completion");

    wait_for_state(&store, |s| s.session.status == AuthStatus::Authenticated).await;
    assert_eq!(credentials.store_calls(), 1);

    let expires = store.state(|s| s.session.expires_at).await;
    assert_eq!(expires, Some(now() + ChronoDuration::hours(24)));
}

#[tokio::test]
async fn feed_fetch_then_lookup_by_number_uses_the_cache() {
    let api = MockApi::new().with_feed(Ok(OrdersPayload {
        orders: vec![order("o1", 101), order("o2", 102)],
        total: 2,
        total_today: 2,
    }));
    let store = store_with(api, MockCredentialStore::new(), MockSnapshotStore::new());

    store
        .send_and_wait_for(
            AppAction::Feed(FeedAction::FetchPage { page: 1 }),
            |a| matches!(a, AppAction::Feed(FeedAction::FetchSucceeded { .. })),
            Duration::from_secs(1),
        )
        .await
        .expect("feed completion");

    wait_for_state(&store, |s| s.feed.orders.len() == 2).await;

    let found = store
        .state(|s| selectors::order_by_number(s, 102).map(|o| o.id.clone()))
        .await;
    assert_eq!(found.as_deref(), Some("o2"));
}

#[tokio::test]
async fn order_by_number_not_found_becomes_a_slice_error() {
    let api = MockApi::new().with_order_by_number(Err(StorefrontError::OrderNotFound));
    let store = store_with(api, MockCredentialStore::new(), MockSnapshotStore::new());

    store
        .send_and_wait_for(
            AppAction::Feed(FeedAction::FetchByNumber { number: 404 }),
            |a| matches!(a, AppAction::Feed(FeedAction::SingleOrderFailed { .. })),
            Duration::from_secs(1),
        )
        .await
        .expect("lookup completion");

    wait_for_state(&store, |s| s.feed.error.as_deref() == Some("order not found")).await;
    let single = store.state(|s| s.feed.single_order.clone()).await;
    assert!(single.is_none());
}

#[tokio::test]
async fn hydrate_applies_a_fresh_snapshot() {
    let snapshot = Snapshot {
        catalog: burgerline_storefront::catalog::CatalogState {
            items: vec![ingredient("b1", IngredientKind::Bun, 100)],
            ..Default::default()
        },
        feed: burgerline_storefront::feed::FeedState::default(),
        written_at: now() - ChronoDuration::hours(2),
    };
    let snapshots = MockSnapshotStore::with_snapshot(snapshot);
    let store = store_with(MockApi::new(), MockCredentialStore::new(), snapshots);

    store
        .send_and_wait_for(
            AppAction::Hydrate,
            |a| matches!(a, AppAction::Hydrated { .. }),
            Duration::from_secs(1),
        )
        .await
        .expect("hydration completion");

    wait_for_state(&store, |s| s.catalog.items.len() == 1).await;
}

#[tokio::test]
async fn check_without_credentials_still_marks_auth_checked() {
    let store = store_with(MockApi::new(), MockCredentialStore::new(), MockSnapshotStore::new());

    store
        .send_and_wait_for(
            AppAction::Session(SessionAction::Check),
            |a| matches!(a, AppAction::Session(SessionAction::ProbeSkipped)),
            Duration::from_secs(1),
        )
        .await
        .expect("check completion");

    wait_for_state(&store, |s| {
        s.session.auth_checked && s.session.status == AuthStatus::Unauthenticated
    })
    .await;
}

#[tokio::test]
async fn graceful_shutdown_waits_for_in_flight_effects() {
    let api = MockApi::new().with_ingredients(Ok(vec![]));
    let store = store_with(api, MockCredentialStore::new(), MockSnapshotStore::new());

    store
        .send(AppAction::Catalog(CatalogAction::FetchAll))
        .await
        .expect("send");
    store
        .shutdown(Duration::from_secs(2))
        .await
        .expect("shutdown");

    assert!(store.send(AppAction::Hydrate).await.is_err());
}
