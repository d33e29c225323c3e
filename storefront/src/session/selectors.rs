//! Pure read functions over the session slice.

use chrono::{DateTime, Utc};

use crate::session::{AuthStatus, SessionState};
use crate::types::User;

/// Whether a session currently exists.
#[must_use]
pub fn is_authenticated(state: &SessionState) -> bool {
    state.status == AuthStatus::Authenticated
}

/// Whether the session exists and its validity window covers `now`.
#[must_use]
pub fn is_session_valid(state: &SessionState, now: DateTime<Utc>) -> bool {
    is_authenticated(state) && state.expires_at.is_some_and(|at| now <= at)
}

/// The cached profile, if any.
#[must_use]
pub fn profile(state: &SessionState) -> Option<&User> {
    state.user.as_ref()
}
