//! Scripted API mock.

#![allow(clippy::expect_used)] // Mock lock poisoning is a test bug

use std::sync::{Arc, Mutex};

use crate::error::{Result, StorefrontError};
use crate::providers::{AuthSession, OrdersPayload, StorefrontApi, TokenPair};
use crate::types::{Ingredient, Order, ProfileUpdate, User};

#[derive(Debug, Default)]
struct Inner {
    ingredients: Option<Result<Vec<Ingredient>>>,
    feed: Option<Result<OrdersPayload>>,
    order_by_number: Option<Result<Order>>,
    created_order: Option<Result<Order>>,
    user_orders: Option<Result<OrdersPayload>>,
    session: Option<Result<AuthSession>>,
    user: Option<Result<User>>,
    updated_user: Option<Result<User>>,
    token_pair: Option<Result<TokenPair>>,
    logout: Option<Result<()>>,
    submitted_orders: Vec<Vec<String>>,
    logout_calls: usize,
}

/// Scripted [`StorefrontApi`] double.
///
/// Each endpoint returns its scripted response; an unscripted endpoint
/// returns a transport error so a test cannot silently depend on it. Clones
/// share the same script and call record.
#[derive(Debug, Clone, Default)]
pub struct MockApi {
    inner: Arc<Mutex<Inner>>,
}

impl MockApi {
    /// Create a mock with no scripted responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("mock api lock poisoned")
    }

    /// Script the ingredient catalog response.
    #[must_use]
    pub fn with_ingredients(self, response: Result<Vec<Ingredient>>) -> Self {
        self.lock().ingredients = Some(response);
        self
    }

    /// Script the public feed response.
    #[must_use]
    pub fn with_feed(self, response: Result<OrdersPayload>) -> Self {
        self.lock().feed = Some(response);
        self
    }

    /// Script the order-by-number response.
    #[must_use]
    pub fn with_order_by_number(self, response: Result<Order>) -> Self {
        self.lock().order_by_number = Some(response);
        self
    }

    /// Script the order creation response.
    #[must_use]
    pub fn with_created_order(self, response: Result<Order>) -> Self {
        self.lock().created_order = Some(response);
        self
    }

    /// Script the order history response.
    #[must_use]
    pub fn with_user_orders(self, response: Result<OrdersPayload>) -> Self {
        self.lock().user_orders = Some(response);
        self
    }

    /// Script the login/registration response.
    #[must_use]
    pub fn with_session(self, response: Result<AuthSession>) -> Self {
        self.lock().session = Some(response);
        self
    }

    /// Script the profile probe response.
    #[must_use]
    pub fn with_user(self, response: Result<User>) -> Self {
        self.lock().user = Some(response);
        self
    }

    /// Script the profile update response.
    #[must_use]
    pub fn with_updated_user(self, response: Result<User>) -> Self {
        self.lock().updated_user = Some(response);
        self
    }

    /// Script the token refresh response.
    #[must_use]
    pub fn with_token_pair(self, response: Result<TokenPair>) -> Self {
        self.lock().token_pair = Some(response);
        self
    }

    /// Script the logout response.
    #[must_use]
    pub fn with_logout(self, response: Result<()>) -> Self {
        self.lock().logout = Some(response);
        self
    }

    /// Ingredient id sequences submitted through `create_order`, in order.
    #[must_use]
    pub fn submitted_orders(&self) -> Vec<Vec<String>> {
        self.lock().submitted_orders.clone()
    }

    /// How many times `logout` was called.
    #[must_use]
    pub fn logout_calls(&self) -> usize {
        self.lock().logout_calls
    }
}

fn unscripted<T>(endpoint: &str) -> Result<T> {
    Err(StorefrontError::Transport(format!(
        "mock api: no scripted response for {endpoint}"
    )))
}

impl StorefrontApi for MockApi {
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>> {
        self.lock()
            .ingredients
            .clone()
            .unwrap_or_else(|| unscripted("fetch_ingredients"))
    }

    async fn fetch_feed(&self) -> Result<OrdersPayload> {
        self.lock().feed.clone().unwrap_or_else(|| unscripted("fetch_feed"))
    }

    async fn fetch_order_by_number(&self, _number: u64) -> Result<Order> {
        self.lock()
            .order_by_number
            .clone()
            .unwrap_or_else(|| unscripted("fetch_order_by_number"))
    }

    async fn create_order(&self, ingredient_ids: Vec<String>) -> Result<Order> {
        let mut inner = self.lock();
        inner.submitted_orders.push(ingredient_ids);
        inner
            .created_order
            .clone()
            .unwrap_or_else(|| unscripted("create_order"))
    }

    async fn fetch_user_orders(&self) -> Result<OrdersPayload> {
        self.lock()
            .user_orders
            .clone()
            .unwrap_or_else(|| unscripted("fetch_user_orders"))
    }

    async fn login(&self, _email: String, _password: String) -> Result<AuthSession> {
        self.lock().session.clone().unwrap_or_else(|| unscripted("login"))
    }

    async fn register(
        &self,
        _name: String,
        _email: String,
        _password: String,
    ) -> Result<AuthSession> {
        self.lock().session.clone().unwrap_or_else(|| unscripted("register"))
    }

    async fn logout(&self, _refresh_token: String) -> Result<()> {
        let mut inner = self.lock();
        inner.logout_calls += 1;
        inner.logout.clone().unwrap_or(Ok(()))
    }

    async fn fetch_user(&self) -> Result<User> {
        self.lock().user.clone().unwrap_or_else(|| unscripted("fetch_user"))
    }

    async fn update_user(&self, _update: ProfileUpdate) -> Result<User> {
        self.lock()
            .updated_user
            .clone()
            .unwrap_or_else(|| unscripted("update_user"))
    }

    async fn refresh_token(&self, _refresh_token: String) -> Result<TokenPair> {
        self.lock()
            .token_pair
            .clone()
            .unwrap_or_else(|| unscripted("refresh_token"))
    }
}
