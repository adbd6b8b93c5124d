//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - The initial state
//! - How a guess turns one state into the next
//! - Win/loss conditions
//!
//! The terminal session drives any `RulesEngine` without knowing the
//! concrete game behind it.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
