//! # Burgerline Core
//!
//! Core traits and types for the Burgerline state architecture.
//!
//! This crate provides the fundamental abstractions for the storefront's
//! client-side state layer: pure reducers over tagged action enums, with
//! side effects described as values and executed by the runtime crate.
//!
//! ## Core Concepts
//!
//! - **State**: owned domain state for one slice
//! - **Action**: all possible inputs to a reducer (commands and completion events)
//! - **Reducer**: pure function `(State, Action, Environment) → Effects`
//! - **Effect**: side effect descriptions (not execution)
//! - **Environment**: injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional core, imperative shell
//! - Unidirectional data flow
//! - Explicit effects (no hidden I/O)
//! - Dependency injection via the environment parameter
//!
//! ## Example
//!
//! ```
//! use burgerline_core::{Effect, Reducer, SmallVec, smallvec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut Self::State,
//!         action: Self::Action,
//!         _env: &Self::Environment,
//!     ) -> SmallVec<[Effect<Self::Action>; 4]> {
//!         match action {
//!             CounterAction::Increment => {
//!                 state.count += 1;
//!                 smallvec![Effect::None]
//!             }
//!         }
//!     }
//! }
//! ```

pub mod effect;
pub mod environment;
pub mod reducer;

pub use effect::Effect;
pub use reducer::Reducer;

// Re-export commonly used types so slice crates share one version.
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{SmallVec, smallvec};
