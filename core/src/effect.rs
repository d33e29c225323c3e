//! Side effect descriptions.
//!
//! Effects are NOT executed when a reducer returns them. They are values
//! describing what should happen, executed by the Store runtime. An effect
//! may produce a feedback action, which is dispatched back into the reducer.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// A boxed future that may produce a feedback action.
pub type EffectFuture<Action> = Pin<Box<dyn Future<Output = Option<Action>> + Send>>;

/// Effect type - describes a side effect to be executed.
///
/// # Type Parameters
///
/// - `Action`: the action type an effect can produce (feedback loop)
#[allow(missing_docs)]
pub enum Effect<Action> {
    /// No-op effect.
    None,

    /// Run effects in parallel.
    Parallel(Vec<Effect<Action>>),

    /// Run effects sequentially, each waiting for the previous to finish.
    Sequential(Vec<Effect<Action>>),

    /// Delayed action (for timeouts, polling).
    Delay {
        /// How long to wait.
        duration: Duration,
        /// Action to dispatch after the delay.
        action: Box<Action>,
    },

    /// Arbitrary async computation.
    ///
    /// Returns `Option<Action>` - if `Some`, the action is fed back into the
    /// reducer.
    Future(EffectFuture<Action>),
}

// Manual Debug implementation since Future doesn't implement Debug.
impl<Action> std::fmt::Debug for Effect<Action>
where
    Action: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Parallel(effects) => f.debug_tuple("Effect::Parallel").field(effects).finish(),
            Effect::Sequential(effects) => {
                f.debug_tuple("Effect::Sequential").field(effects).finish()
            },
            Effect::Delay { duration, action } => f
                .debug_struct("Effect::Delay")
                .field("duration", duration)
                .field("action", action)
                .finish(),
            Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
        }
    }
}

impl<Action> Effect<Action> {
    /// Combine effects to run in parallel.
    #[must_use]
    pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Parallel(effects)
    }

    /// Chain effects to run sequentially.
    #[must_use]
    pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
        Effect::Sequential(effects)
    }

    /// Lift this effect into a parent action type.
    ///
    /// Used by aggregating reducers to embed a child slice's effects into
    /// the parent action enum while keeping the feedback loop intact.
    #[must_use]
    pub fn map<Parent, F>(self, f: F) -> Effect<Parent>
    where
        Action: Send + 'static,
        Parent: Send + 'static,
        F: Fn(Action) -> Parent + Clone + Send + Sync + 'static,
    {
        match self {
            Effect::None => Effect::None,
            Effect::Parallel(effects) => {
                Effect::Parallel(effects.into_iter().map(|e| e.map(f.clone())).collect())
            },
            Effect::Sequential(effects) => {
                Effect::Sequential(effects.into_iter().map(|e| e.map(f.clone())).collect())
            },
            Effect::Delay { duration, action } => Effect::Delay {
                duration,
                action: Box::new(f(*action)),
            },
            Effect::Future(fut) => Effect::Future(Box::pin(async move { fut.await.map(f) })),
        }
    }
}
