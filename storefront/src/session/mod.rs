//! User session slice.
//!
//! State machine: `Idle -> Checking -> Authenticated | Unauthenticated`.
//! Owns the cached profile, the 24-hour session validity window, and the
//! auth-checked flag that gates route rendering.

mod actions;
mod reducer;
pub mod selectors;

use chrono::{DateTime, Utc};

use crate::types::User;

pub use actions::SessionAction;
pub use reducer::SessionReducer;

/// Authentication status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// No check attempted yet.
    #[default]
    Idle,
    /// A probe, login, or registration is in flight.
    Checking,
    /// A valid session exists.
    Authenticated,
    /// No valid session.
    Unauthenticated,
}

/// Session slice state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Where the state machine currently is.
    pub status: AuthStatus,
    /// At least one auth check has completed; routes can render.
    pub auth_checked: bool,
    /// Cached profile of the authenticated user.
    pub user: Option<User>,
    /// Last auth error; cleared when the next attempt starts.
    pub error: Option<String>,
    /// A session request is in flight.
    pub in_flight: bool,
    /// When the session state last changed successfully.
    pub last_updated: Option<DateTime<Utc>>,
    /// End of the current validity window; re-stamped on every successful
    /// probe, login, or registration.
    pub expires_at: Option<DateTime<Utc>>,
}
