//! Root reducer.
//!
//! Delegates each wrapped action to its slice reducer and lifts the slice
//! effects into [`AppAction`] with `Effect::map`. Catalog and feed mutations
//! additionally schedule a best-effort snapshot write.

use burgerline_core::effect::Effect;
use burgerline_core::reducer::Reducer;
use burgerline_core::{SmallVec, smallvec};

use crate::app::{AppAction, AppState};
use crate::catalog::CatalogReducer;
use crate::environment::StorefrontEnvironment;
use crate::feed::FeedReducer;
use crate::history::HistoryReducer;
use crate::providers::{CredentialStore, Snapshot, SnapshotStore, StorefrontApi};
use crate::selection::SelectionReducer;
use crate::session::SessionReducer;

/// Reducer over the whole state tree.
#[derive(Debug, Clone, Default)]
pub struct AppReducer<A, C, S> {
    catalog: CatalogReducer<A, C, S>,
    selection: SelectionReducer<A, C, S>,
    feed: FeedReducer<A, C, S>,
    history: HistoryReducer<A, C, S>,
    session: SessionReducer<A, C, S>,
}

impl<A, C, S> AppReducer<A, C, S> {
    /// Create the reducer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            catalog: CatalogReducer::new(),
            selection: SelectionReducer::new(),
            feed: FeedReducer::new(),
            history: HistoryReducer::new(),
            session: SessionReducer::new(),
        }
    }
}

/// Persist the catalog and feed slices. Failures are logged and swallowed;
/// the dispatcher never sees them.
fn persist_snapshot<A, C, S>(
    state: &AppState,
    env: &StorefrontEnvironment<A, C, S>,
) -> Effect<AppAction>
where
    A: StorefrontApi + Clone + 'static,
    C: CredentialStore + Clone + 'static,
    S: SnapshotStore + Clone + 'static,
{
    let snapshot = Snapshot {
        catalog: state.catalog.clone(),
        feed: state.feed.clone(),
        written_at: env.clock.now(),
    };
    let snapshots = env.snapshots.clone();
    Effect::Future(Box::pin(async move {
        if let Err(e) = snapshots.save(&snapshot).await {
            tracing::warn!(error = %e, "snapshot save failed");
        }
        None
    }))
}

impl<A, C, S> Reducer for AppReducer<A, C, S>
where
    A: StorefrontApi + Clone + 'static,
    C: CredentialStore + Clone + 'static,
    S: SnapshotStore + Clone + 'static,
{
    type State = AppState;
    type Action = AppAction;
    type Environment = StorefrontEnvironment<A, C, S>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AppAction::Catalog(action) => {
                let mut effects: SmallVec<[Effect<AppAction>; 4]> = self
                    .catalog
                    .reduce(&mut state.catalog, action, env)
                    .into_iter()
                    .map(|e| e.map(AppAction::Catalog))
                    .collect();
                effects.push(persist_snapshot(state, env));
                effects
            },

            AppAction::Selection(action) => self
                .selection
                .reduce(&mut state.selection, action, env)
                .into_iter()
                .map(|e| e.map(AppAction::Selection))
                .collect(),

            AppAction::Feed(action) => {
                let mut effects: SmallVec<[Effect<AppAction>; 4]> = self
                    .feed
                    .reduce(&mut state.feed, action, env)
                    .into_iter()
                    .map(|e| e.map(AppAction::Feed))
                    .collect();
                effects.push(persist_snapshot(state, env));
                effects
            },

            AppAction::History(action) => self
                .history
                .reduce(&mut state.history, action, env)
                .into_iter()
                .map(|e| e.map(AppAction::History))
                .collect(),

            AppAction::Session(action) => self
                .session
                .reduce(&mut state.session, action, env)
                .into_iter()
                .map(|e| e.map(AppAction::Session))
                .collect(),

            AppAction::Hydrate => {
                let snapshots = env.snapshots.clone();
                smallvec![Effect::Future(Box::pin(async move {
                    match snapshots.load().await {
                        Ok(Some(snapshot)) => Some(AppAction::Hydrated { snapshot }),
                        Ok(None) => None,
                        Err(e) => {
                            tracing::warn!(error = %e, "snapshot load failed");
                            None
                        },
                    }
                }))]
            },

            AppAction::Hydrated { snapshot } => {
                if snapshot.is_fresh(env.clock.now()) {
                    state.catalog = snapshot.catalog;
                    state.feed = snapshot.feed;
                } else {
                    tracing::debug!("discarding stale snapshot");
                }
                smallvec![Effect::None]
            },
        }
    }
}
