//! Error types.
//!
//! Two families with different propagation rules:
//!
//! - [`GameError`]: configuration and construction failures. Returned as
//!   `Err` from constructors; no partial game is ever produced.
//! - [`GuessError`]: per-guess validation failures. Never returned as `Err`;
//!   the engine embeds them in the resulting [`GameState`](super::GameState)
//!   and play continues.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use super::value::Value;

/// Game construction failure.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum GameError {
    /// `max_number` is not an integer greater or equal to 1.
    #[display("Invalid maxNumber configuration ({value}). Must be an integer higher or equal to 1")]
    InvalidMaxNumber {
        /// The rejected value.
        value: Value,
    },

    /// `max_tries` is not an integer in `[1, max_number]`.
    #[display(
        "Invalid maxTries configuration ({value}). Must be an integer higher or equal to 1 and lower or equal than {max_number}"
    )]
    InvalidMaxTries {
        /// The rejected value.
        value: Value,
        /// The bound it was checked against.
        max_number: i64,
    },

    /// The random draw for the target did not produce a value.
    #[display("Error when generating the number to guess")]
    TargetGenerationFailed,

    /// An explicit target lies outside `[1, max_number]`.
    #[display("Target {target} is outside of [1, {max_number}]")]
    InvalidTarget {
        /// The rejected target.
        target: i64,
        /// Upper bound of the configuration.
        max_number: i64,
    },
}

/// Why a guess was rejected.
///
/// Rejected guesses do not consume a turn.
#[derive(Clone, Debug, PartialEq, Display, Error, Serialize, Deserialize)]
pub enum GuessError {
    /// The guess is not an integer.
    #[display("Invalid integer: {value}")]
    NotAnInteger {
        /// The rejected guess.
        value: Value,
    },

    /// The guess is an integer below 1.
    #[display("Your number must be higher than 0")]
    BelowMinimum,

    /// The guess is an integer above the configured maximum.
    #[display("Your number must be lower or equal than {max_number}")]
    AboveMaximum {
        /// The configured maximum.
        max_number: i64,
    },
}

/// A value could not be read as a finite number.
#[derive(Clone, Debug, PartialEq, Display, Error)]
#[display("Not a number: {value}")]
pub struct NotANumber {
    /// The offending value.
    pub value: Value,
}
