//! Upstream REST API provider.
//!
//! The [`StorefrontApi`] trait is the whole network surface the reducers
//! know about. [`HttpApi`] is the production implementation over `reqwest`;
//! the mocks implement the same trait for tests.

use std::future::Future;

use serde::Deserialize;

use crate::error::{Result, StorefrontError};
use crate::providers::credentials::CredentialStore;
use crate::types::{Ingredient, Order, ProfileUpdate, User};

/// A page-less list of orders as the upstream reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersPayload {
    /// Orders, most recent first.
    pub orders: Vec<Order>,
    /// Total orders ever, echoed by the upstream.
    pub total: u64,
    /// Orders placed today, echoed by the upstream.
    pub total_today: u64,
}

/// Profile plus fresh token pair returned by login and registration.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    /// The authenticated user's profile.
    pub user: User,
    /// Short-lived access token.
    pub access_token: String,
    /// Durable refresh token.
    pub refresh_token: String,
}

/// Fresh token pair returned by the refresh endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Durable refresh token.
    pub refresh_token: String,
}

/// The upstream REST contract, one method per endpoint.
///
/// Methods take owned arguments so the returned futures are `'static` and
/// can be boxed into effects.
pub trait StorefrontApi: Send + Sync {
    /// Fetch the full ingredient catalog.
    fn fetch_ingredients(&self) -> impl Future<Output = Result<Vec<Ingredient>>> + Send;

    /// Fetch the public order feed.
    fn fetch_feed(&self) -> impl Future<Output = Result<OrdersPayload>> + Send;

    /// Fetch a single order by its human-readable number.
    ///
    /// A success envelope with an empty order list is reported as
    /// [`StorefrontError::OrderNotFound`].
    fn fetch_order_by_number(&self, number: u64) -> impl Future<Output = Result<Order>> + Send;

    /// Submit a new order. Requires authentication.
    fn create_order(&self, ingredient_ids: Vec<String>)
    -> impl Future<Output = Result<Order>> + Send;

    /// Fetch the authenticated user's order history.
    fn fetch_user_orders(&self) -> impl Future<Output = Result<OrdersPayload>> + Send;

    /// Exchange credentials for a session.
    fn login(
        &self,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<AuthSession>> + Send;

    /// Create an account and log in.
    fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> impl Future<Output = Result<AuthSession>> + Send;

    /// Invalidate the given refresh token upstream.
    fn logout(&self, refresh_token: String) -> impl Future<Output = Result<()>> + Send;

    /// Fetch the authenticated user's profile.
    fn fetch_user(&self) -> impl Future<Output = Result<User>> + Send;

    /// Apply a partial profile update.
    fn update_user(&self, update: ProfileUpdate) -> impl Future<Output = Result<User>> + Send;

    /// Exchange a refresh token for a fresh token pair.
    fn refresh_token(&self, refresh_token: String)
    -> impl Future<Output = Result<TokenPair>> + Send;
}

// Wire envelopes. Every upstream response carries a `success` flag; list
// payloads echo totals alongside the data.

#[derive(Deserialize)]
struct IngredientsEnvelope {
    success: bool,
    data: Vec<Ingredient>,
}

#[derive(Deserialize)]
struct OrdersEnvelope {
    success: bool,
    orders: Vec<Order>,
    total: u64,
    #[serde(rename = "totalToday")]
    total_today: u64,
}

#[derive(Deserialize)]
struct OrdersByNumberEnvelope {
    success: bool,
    orders: Vec<Order>,
}

#[derive(Deserialize)]
struct CreateOrderEnvelope {
    success: bool,
    order: Order,
}

#[derive(Deserialize)]
struct AuthEnvelope {
    success: bool,
    user: User,
    #[serde(rename = "accessToken")]
    access_token: String,
    #[serde(rename = "refreshToken")]
    refresh_token: String,
}

#[derive(Deserialize)]
struct UserEnvelope {
    success: bool,
    user: User,
}

#[derive(Deserialize)]
struct TokenEnvelope {
    success: bool,
    #[serde(rename = "accessToken")]
    access_token: String,
    #[serde(rename = "refreshToken")]
    refresh_token: String,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    success: bool,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

/// Production API client over `reqwest`.
///
/// Attaches the bearer token from the credential store to authenticated
/// requests. When the upstream rejects the token (401/403), refreshes the
/// token pair once through the refresh endpoint and retries the request;
/// a second rejection is surfaced as [`StorefrontError::Unauthorized`].
#[derive(Clone)]
pub struct HttpApi<C> {
    client: reqwest::Client,
    base_url: String,
    credentials: C,
}

impl<C> HttpApi<C>
where
    C: CredentialStore + Clone,
{
    /// Create a client against the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>, credentials: C) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn build(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&serde_json::Value>,
        bearer: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let mut request = self.client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| StorefrontError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorEnvelope>(&bytes)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| status.to_string());
            return Err(StorefrontError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| StorefrontError::Transport(e.to_string()))
    }

    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&serde_json::Value>,
        bearer: Option<&str>,
    ) -> Result<T> {
        let response = self
            .build(method, path, body, bearer)
            .send()
            .await
            .map_err(|e| StorefrontError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    /// Anonymous request, no token attached.
    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        self.execute(method, path, body.as_ref(), None).await
    }

    /// Authenticated request with a single refresh-and-retry on rejection.
    async fn request_authorized<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let access = self
            .credentials
            .access_token()
            .await?
            .ok_or(StorefrontError::Unauthorized)?;

        match self
            .execute(method.clone(), path, body.as_ref(), Some(&access))
            .await
        {
            Err(StorefrontError::Api { status, .. }) if status == 401 || status == 403 => {
                tracing::debug!(status, "access token rejected, refreshing");
                let fresh = self.refresh_credentials().await?;
                self.execute(method, path, body.as_ref(), Some(&fresh))
                    .await
                    .map_err(|e| match e {
                        StorefrontError::Api { status, .. } if status == 401 || status == 403 => {
                            StorefrontError::Unauthorized
                        },
                        other => other,
                    })
            },
            other => other,
        }
    }

    /// Exchange the stored refresh token for a fresh pair, store it, and
    /// return the new access token.
    async fn refresh_credentials(&self) -> Result<String> {
        let refresh = self
            .credentials
            .refresh_token()
            .await?
            .ok_or(StorefrontError::Unauthorized)?;
        let pair = StorefrontApi::refresh_token(self, refresh).await?;
        self.credentials
            .store(&pair.access_token, &pair.refresh_token)
            .await?;
        Ok(pair.access_token)
    }
}

fn reject_unless_success<T>(success: bool, value: T) -> Result<T> {
    if success {
        Ok(value)
    } else {
        Err(StorefrontError::Api {
            status: 200,
            message: "request rejected by upstream".into(),
        })
    }
}

impl<C> StorefrontApi for HttpApi<C>
where
    C: CredentialStore + Clone + Send + Sync,
{
    async fn fetch_ingredients(&self) -> Result<Vec<Ingredient>> {
        let envelope: IngredientsEnvelope =
            self.request(reqwest::Method::GET, "/ingredients", None).await?;
        reject_unless_success(envelope.success, envelope.data)
    }

    async fn fetch_feed(&self) -> Result<OrdersPayload> {
        let envelope: OrdersEnvelope =
            self.request(reqwest::Method::GET, "/orders/all", None).await?;
        reject_unless_success(
            envelope.success,
            OrdersPayload {
                orders: envelope.orders,
                total: envelope.total,
                total_today: envelope.total_today,
            },
        )
    }

    async fn fetch_order_by_number(&self, number: u64) -> Result<Order> {
        let envelope: OrdersByNumberEnvelope = self
            .request(reqwest::Method::GET, &format!("/orders/{number}"), None)
            .await?;
        let orders = reject_unless_success(envelope.success, envelope.orders)?;
        orders
            .into_iter()
            .next()
            .ok_or(StorefrontError::OrderNotFound)
    }

    async fn create_order(&self, ingredient_ids: Vec<String>) -> Result<Order> {
        let body = serde_json::json!({ "ingredients": ingredient_ids });
        let envelope: CreateOrderEnvelope = self
            .request_authorized(reqwest::Method::POST, "/orders", Some(body))
            .await?;
        reject_unless_success(envelope.success, envelope.order)
    }

    async fn fetch_user_orders(&self) -> Result<OrdersPayload> {
        let envelope: OrdersEnvelope = self
            .request_authorized(reqwest::Method::GET, "/orders", None)
            .await?;
        reject_unless_success(
            envelope.success,
            OrdersPayload {
                orders: envelope.orders,
                total: envelope.total,
                total_today: envelope.total_today,
            },
        )
    }

    async fn login(&self, email: String, password: String) -> Result<AuthSession> {
        let body = serde_json::json!({ "email": email, "password": password });
        let envelope: AuthEnvelope = self
            .request(reqwest::Method::POST, "/auth/login", Some(body))
            .await?;
        reject_unless_success(
            envelope.success,
            AuthSession {
                user: envelope.user,
                access_token: envelope.access_token,
                refresh_token: envelope.refresh_token,
            },
        )
    }

    async fn register(&self, name: String, email: String, password: String) -> Result<AuthSession> {
        let body = serde_json::json!({ "name": name, "email": email, "password": password });
        let envelope: AuthEnvelope = self
            .request(reqwest::Method::POST, "/auth/register", Some(body))
            .await?;
        reject_unless_success(
            envelope.success,
            AuthSession {
                user: envelope.user,
                access_token: envelope.access_token,
                refresh_token: envelope.refresh_token,
            },
        )
    }

    async fn logout(&self, refresh_token: String) -> Result<()> {
        let body = serde_json::json!({ "token": refresh_token });
        let envelope: MessageEnvelope = self
            .request(reqwest::Method::POST, "/auth/logout", Some(body))
            .await?;
        reject_unless_success(envelope.success, ())
    }

    async fn fetch_user(&self) -> Result<User> {
        let envelope: UserEnvelope = self
            .request_authorized(reqwest::Method::GET, "/auth/user", None)
            .await?;
        reject_unless_success(envelope.success, envelope.user)
    }

    async fn update_user(&self, update: ProfileUpdate) -> Result<User> {
        let body = serde_json::to_value(&update)
            .map_err(|e| StorefrontError::Validation(e.to_string()))?;
        let envelope: UserEnvelope = self
            .request_authorized(reqwest::Method::PATCH, "/auth/user", Some(body))
            .await?;
        reject_unless_success(envelope.success, envelope.user)
    }

    async fn refresh_token(&self, refresh_token: String) -> Result<TokenPair> {
        let body = serde_json::json!({ "token": refresh_token });
        let envelope: TokenEnvelope = self
            .request(reqwest::Method::POST, "/auth/token", Some(body))
            .await?;
        reject_unless_success(
            envelope.success,
            TokenPair {
                access_token: envelope.access_token,
                refresh_token: envelope.refresh_token,
            },
        )
    }
}
