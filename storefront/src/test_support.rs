//! Shared fixtures for slice tests.

#![allow(clippy::expect_used)]

use std::sync::Arc;

use burgerline_core::environment::FixedClock;
use chrono::{DateTime, TimeZone, Utc};

use crate::environment::StorefrontEnvironment;
use crate::mocks::{MockApi, MockCredentialStore, MockSnapshotStore};
use crate::types::{Ingredient, IngredientKind, Order, OrderStatus, User};

pub type TestEnv = StorefrontEnvironment<MockApi, MockCredentialStore, MockSnapshotStore>;

/// The instant every test clock reports.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub fn env_with(api: MockApi, credentials: MockCredentialStore, snapshots: MockSnapshotStore) -> TestEnv {
    StorefrontEnvironment::new(api, credentials, snapshots, Arc::new(FixedClock(now())))
}

pub fn test_env() -> TestEnv {
    env_with(MockApi::new(), MockCredentialStore::new(), MockSnapshotStore::new())
}

pub fn ingredient(id: &str, kind: IngredientKind, price: u32) -> Ingredient {
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

pub fn bun(id: &str, price: u32) -> Ingredient {
    ingredient(id, IngredientKind::Bun, price)
}

pub fn patty(id: &str, price: u32) -> Ingredient {
    ingredient(id, IngredientKind::Main, price)
}

pub fn sauce(id: &str, price: u32) -> Ingredient {
    ingredient(id, IngredientKind::Sauce, price)
}

pub fn order(id: &str, number: u64, status: OrderStatus, minute: u32) -> Order {
    let at = Utc
        .with_ymd_and_hms(2024, 3, 1, 11, minute, 0)
        .single()
        .expect("valid timestamp");
    Order {
        id: id.into(),
        number,
        name: format!("Order {number}"),
        status,
        created_at: at,
        updated_at: at,
        ingredients: vec!["b1".into(), "m1".into(), "b1".into()],
    }
}

pub fn user() -> User {
    User {
        name: "Ada".into(),
        email: "ada@example.test".into(),
        created_at: None,
        updated_at: None,
    }
}
