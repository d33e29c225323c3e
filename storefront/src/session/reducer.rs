//! Session slice reducer.

use std::marker::PhantomData;

use burgerline_core::effect::Effect;
use burgerline_core::reducer::Reducer;
use burgerline_core::{SmallVec, smallvec};
use chrono::Duration;

use crate::constants::SESSION_TTL_HOURS;
use crate::environment::StorefrontEnvironment;
use crate::providers::{CredentialStore, SnapshotStore, StorefrontApi};
use crate::session::{AuthStatus, SessionAction, SessionState};

/// Reducer for the session slice.
#[derive(Debug, Clone)]
pub struct SessionReducer<A, C, S> {
    _phantom: PhantomData<(A, C, S)>,
}

impl<A, C, S> SessionReducer<A, C, S> {
    /// Create the reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<A, C, S> Default for SessionReducer<A, C, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, C, S> Reducer for SessionReducer<A, C, S>
where
    A: StorefrontApi + Clone + 'static,
    C: CredentialStore + Clone + 'static,
    S: SnapshotStore + Clone + 'static,
{
    type State = SessionState;
    type Action = SessionAction;
    type Environment = StorefrontEnvironment<A, C, S>;

    #[allow(clippy::too_many_lines)]
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            SessionAction::Check => {
                state.status = AuthStatus::Checking;
                state.error = None;
                state.in_flight = true;

                let api = env.api.clone();
                let credentials = env.credentials.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match credentials.refresh_token().await {
                        Ok(None) => Some(SessionAction::ProbeSkipped),
                        Ok(Some(_)) => match api.fetch_user().await {
                            Ok(user) => Some(SessionAction::ProbeSucceeded { user }),
                            Err(e) => {
                                if let Err(clear_err) = credentials.clear().await {
                                    tracing::warn!(error = %clear_err, "failed to clear credentials");
                                }
                                Some(SessionAction::ProbeFailed {
                                    error: e.to_string(),
                                })
                            },
                        },
                        Err(e) => Some(SessionAction::ProbeFailed {
                            error: e.to_string(),
                        }),
                    }
                }))]
            },

            SessionAction::ProbeSkipped => {
                state.status = AuthStatus::Unauthenticated;
                state.auth_checked = true;
                state.in_flight = false;
                smallvec![Effect::None]
            },

            SessionAction::ProbeSucceeded { user } | SessionAction::SignInSucceeded { user } => {
                let now = env.clock.now();
                state.status = AuthStatus::Authenticated;
                state.auth_checked = true;
                state.in_flight = false;
                state.error = None;
                state.user = Some(user);
                state.last_updated = Some(now);
                state.expires_at = Some(now + Duration::hours(SESSION_TTL_HOURS));
                smallvec![Effect::None]
            },

            SessionAction::ProbeFailed { error } | SessionAction::SignInFailed { error } => {
                state.status = AuthStatus::Unauthenticated;
                state.auth_checked = true;
                state.in_flight = false;
                state.error = Some(error);
                state.user = None;
                state.expires_at = None;
                smallvec![Effect::None]
            },

            SessionAction::Login { email, password } => {
                state.status = AuthStatus::Checking;
                state.error = None;
                state.in_flight = true;

                let api = env.api.clone();
                let credentials = env.credentials.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.login(email, password).await {
                        Ok(session) => {
                            if let Err(e) = credentials
                                .store(&session.access_token, &session.refresh_token)
                                .await
                            {
                                tracing::warn!(error = %e, "failed to store credentials");
                            }
                            Some(SessionAction::SignInSucceeded { user: session.user })
                        },
                        Err(e) => {
                            if let Err(clear_err) = credentials.clear().await {
                                tracing::warn!(error = %clear_err, "failed to clear credentials");
                            }
                            Some(SessionAction::SignInFailed {
                                error: e.to_string(),
                            })
                        },
                    }
                }))]
            },

            SessionAction::Register {
                name,
                email,
                password,
            } => {
                state.status = AuthStatus::Checking;
                state.error = None;
                state.in_flight = true;

                let api = env.api.clone();
                let credentials = env.credentials.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.register(name, email, password).await {
                        Ok(session) => {
                            if let Err(e) = credentials
                                .store(&session.access_token, &session.refresh_token)
                                .await
                            {
                                tracing::warn!(error = %e, "failed to store credentials");
                            }
                            Some(SessionAction::SignInSucceeded { user: session.user })
                        },
                        Err(e) => {
                            if let Err(clear_err) = credentials.clear().await {
                                tracing::warn!(error = %clear_err, "failed to clear credentials");
                            }
                            Some(SessionAction::SignInFailed {
                                error: e.to_string(),
                            })
                        },
                    }
                }))]
            },

            SessionAction::Logout => {
                // The local profile goes away immediately, whatever the
                // upstream says.
                state.user = None;
                state.in_flight = true;

                let api = env.api.clone();
                let credentials = env.credentials.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    let refresh = credentials.refresh_token().await.ok().flatten();
                    let outcome = match refresh {
                        Some(token) => api.logout(token).await,
                        None => Ok(()),
                    };
                    if let Err(e) = credentials.clear().await {
                        tracing::warn!(error = %e, "failed to clear credentials");
                    }
                    match outcome {
                        Ok(()) => Some(SessionAction::LogoutSucceeded),
                        Err(e) => Some(SessionAction::LogoutFailed {
                            error: e.to_string(),
                        }),
                    }
                }))]
            },

            SessionAction::LogoutSucceeded => {
                state.status = AuthStatus::Unauthenticated;
                state.auth_checked = true;
                state.in_flight = false;
                // Logout's outcome is independent of completions that landed
                // while it was in flight.
                state.user = None;
                state.last_updated = None;
                state.expires_at = None;
                smallvec![Effect::None]
            },

            SessionAction::LogoutFailed { error } => {
                state.in_flight = false;
                state.error = Some(error);
                smallvec![Effect::None]
            },

            SessionAction::UpdateProfile { update } => {
                state.error = None;
                state.in_flight = true;

                let api = env.api.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match api.update_user(update).await {
                        Ok(user) => Some(SessionAction::ProfileUpdated { user }),
                        Err(e) => Some(SessionAction::ProfileUpdateFailed {
                            error: e.to_string(),
                        }),
                    }
                }))]
            },

            SessionAction::ProfileUpdated { user } => {
                // A completion landing once logout has started (profile
                // already dropped) or resolved must not resurrect the
                // profile, nor clear the logout's in-flight marker.
                if state.status == AuthStatus::Authenticated && state.user.is_some() {
                    state.in_flight = false;
                    state.user = Some(user);
                    state.last_updated = Some(env.clock.now());
                } else {
                    tracing::debug!("ignoring profile update: session ended or ending");
                }
                smallvec![Effect::None]
            },

            SessionAction::ProfileUpdateFailed { error } => {
                if state.status == AuthStatus::Authenticated && state.user.is_some() {
                    state.in_flight = false;
                    state.error = Some(error);
                } else {
                    tracing::debug!("ignoring profile update failure: session ended or ending");
                }
                smallvec![Effect::None]
            },

            SessionAction::ClearError => {
                state.error = None;
                smallvec![Effect::None]
            },

            SessionAction::RefreshSession => {
                if state.status == AuthStatus::Authenticated {
                    let now = env.clock.now();
                    state.last_updated = Some(now);
                    state.expires_at = Some(now + Duration::hours(SESSION_TTL_HOURS));
                }
                smallvec![Effect::None]
            },
        }
    }
}
