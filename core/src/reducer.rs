//! The core trait for business logic.
//!
//! Reducers are pure functions: `(State, Action, Environment) → Effects`.
//! They contain all business logic and are deterministic and testable.

use crate::effect::Effect;
use smallvec::SmallVec;

/// The Reducer trait - core abstraction for business logic.
///
/// # Type Parameters
///
/// - `State`: the domain state this reducer operates on
/// - `Action`: the action type this reducer processes
/// - `Environment`: the injected dependencies this reducer needs
///
/// # Example
///
/// ```ignore
/// impl Reducer for CatalogReducer {
///     type State = CatalogState;
///     type Action = CatalogAction;
///     type Environment = StorefrontEnvironment<Api, Creds, Snap>;
///
///     fn reduce(
///         &self,
///         state: &mut CatalogState,
///         action: CatalogAction,
///         env: &Self::Environment,
///     ) -> SmallVec<[Effect<CatalogAction>; 4]> {
///         // Business logic here
///         smallvec![Effect::None]
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on.
    type State;

    /// The action type this reducer processes.
    type Action;

    /// The environment type with injected dependencies.
    type Environment;

    /// Reduce an action into state changes and effects.
    ///
    /// This is a pure function that:
    /// 1. Validates the action
    /// 2. Updates state in place
    /// 3. Returns effect descriptions to be executed
    ///
    /// Each call is atomic with respect to other calls: the runtime holds
    /// the state write lock for the duration, so no two transitions can
    /// interleave writes to the same slice mid-update.
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]>;
}
