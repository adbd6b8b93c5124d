//! Game configuration.
//!
//! A [`Configuration`] is the validated pair `(max_number, max_tries)`.
//! Validation happens once, in [`ConfigurationBuilder::build`]; a
//! `Configuration` value is therefore always valid and never changes.

use serde::Serialize;

use super::error::GameError;
use super::value::{is_integer, to_integer, Value};

/// Default upper bound for the target and guesses.
pub const DEFAULT_MAX_NUMBER: i64 = 30;

/// Default number of tries before the game is lost.
pub const DEFAULT_MAX_TRIES: i64 = 10;

/// Largest accepted `max_tries`; turns are counted in `u32`.
pub const MAX_TRIES_LIMIT: i64 = u32::MAX as i64;

/// Validated game configuration.
///
/// Invariant: `1 <= max_tries <= min(max_number, MAX_TRIES_LIMIT)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    max_number: i64,
    max_tries: i64,
}

impl Configuration {
    /// Validate an explicit pair.
    pub fn new(max_number: i64, max_tries: i64) -> Result<Self, GameError> {
        Self::builder().max_number(max_number).max_tries(max_tries).build()
    }

    /// Start from the defaults and override fields as needed.
    #[must_use]
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Upper bound (inclusive) for the target and valid guesses.
    #[must_use]
    pub fn max_number(&self) -> i64 {
        self.max_number
    }

    /// Turn at which an unresolved game is lost.
    #[must_use]
    pub fn max_tries(&self) -> i64 {
        self.max_tries
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            max_number: DEFAULT_MAX_NUMBER,
            max_tries: DEFAULT_MAX_TRIES,
        }
    }
}

/// Builder for [`Configuration`].
///
/// Fields accept any [`Value`]; omitted fields (or [`Value::Missing`]) fall
/// back to the defaults.
#[derive(Clone, Debug, Default)]
pub struct ConfigurationBuilder {
    max_number: Value,
    max_tries: Value,
}

impl ConfigurationBuilder {
    /// Set the maximum number.
    #[must_use]
    pub fn max_number(mut self, value: impl Into<Value>) -> Self {
        self.max_number = value.into();
        self
    }

    /// Set the maximum number of tries.
    #[must_use]
    pub fn max_tries(mut self, value: impl Into<Value>) -> Self {
        self.max_tries = value.into();
        self
    }

    /// Apply defaults and validate.
    ///
    /// ## Errors
    ///
    /// - [`GameError::InvalidMaxNumber`] when `max_number` is not an integer >= 1
    /// - [`GameError::InvalidMaxTries`] when `max_tries` is not an integer in
    ///   `[1, max_number]`, or exceeds [`MAX_TRIES_LIMIT`]
    pub fn build(self) -> Result<Configuration, GameError> {
        let max_number = match self.max_number {
            Value::Missing => Value::Int(DEFAULT_MAX_NUMBER),
            v => v,
        };
        let max_tries = match self.max_tries {
            Value::Missing => Value::Int(DEFAULT_MAX_TRIES),
            v => v,
        };

        if !is_valid_max_number(&max_number) {
            return Err(GameError::InvalidMaxNumber { value: max_number });
        }
        let max_number = to_integer(&max_number)
            .map_err(|e| GameError::InvalidMaxNumber { value: e.value })?;

        let tries_bound = max_number.min(MAX_TRIES_LIMIT);
        if !is_valid_max_tries(&max_tries, max_number) {
            return Err(GameError::InvalidMaxTries {
                value: max_tries,
                max_number: tries_bound,
            });
        }
        let max_tries = to_integer(&max_tries).map_err(|e| GameError::InvalidMaxTries {
            value: e.value,
            max_number: tries_bound,
        })?;

        Ok(Configuration {
            max_number,
            max_tries,
        })
    }
}

/// True when `value` is an integer >= 1.
#[must_use]
pub fn is_valid_max_number(value: &Value) -> bool {
    is_integer(value) && to_integer(value).is_ok_and(|n| n >= 1)
}

/// True when `value` is an integer in `[1, max_number]` that also fits the
/// turn counter.
#[must_use]
pub fn is_valid_max_tries(value: &Value, max_number: i64) -> bool {
    let bound = max_number.min(MAX_TRIES_LIMIT);
    is_integer(value) && to_integer(value).is_ok_and(|n| (1..=bound).contains(&n))
}
