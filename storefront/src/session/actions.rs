//! Session slice actions.

use crate::types::{ProfileUpdate, User};

/// Commands and completion events for the session slice.
#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Probe for an existing session. Skips the network when no credential
    /// is stored, but always ends with `auth_checked` set.
    Check,
    /// The probe was skipped: no stored credential.
    ProbeSkipped,
    /// The profile probe succeeded.
    ProbeSucceeded {
        /// The authenticated user's profile.
        user: User,
    },
    /// The profile probe failed; tokens have been cleared.
    ProbeFailed {
        /// Error description for display.
        error: String,
    },
    /// Exchange credentials for a session.
    Login {
        /// Login email.
        email: String,
        /// Password.
        password: String,
    },
    /// Create an account and log in.
    Register {
        /// Display name.
        name: String,
        /// Login email.
        email: String,
        /// Password.
        password: String,
    },
    /// Login or registration succeeded; tokens are stored.
    SignInSucceeded {
        /// The authenticated user's profile.
        user: User,
    },
    /// Login or registration failed; tokens are cleared.
    SignInFailed {
        /// Error description for display.
        error: String,
    },
    /// End the session. Tokens and the local profile are cleared regardless
    /// of the request outcome.
    Logout,
    /// The logout request was fulfilled.
    LogoutSucceeded,
    /// The logout request failed; tokens are cleared anyway.
    LogoutFailed {
        /// Error description for display.
        error: String,
    },
    /// Apply a partial profile update. Never changes auth status.
    UpdateProfile {
        /// Fields to change.
        update: ProfileUpdate,
    },
    /// The profile update succeeded. Ignored unless still authenticated.
    ProfileUpdated {
        /// The updated profile.
        user: User,
    },
    /// The profile update failed.
    ProfileUpdateFailed {
        /// Error description for display.
        error: String,
    },
    /// Clear the slice error.
    ClearError,
    /// Re-stamp the validity window of an authenticated session.
    RefreshSession,
}
