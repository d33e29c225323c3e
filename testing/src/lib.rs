//! # Burgerline Testing
//!
//! Ergonomic testing utilities for Burgerline reducers.
//!
//! Provides a fluent Given-When-Then API for exercising a reducer with a
//! single action and asserting on the resulting state and effects.


pub use reducer_test::{ReducerTest, assertions};
