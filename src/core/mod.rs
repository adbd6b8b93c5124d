//! Core types: input values, validation, RNG, configuration, state, errors.
//!
//! Everything here is pure and game-agnostic about presentation. The play
//! engine in [`crate::games`] is built from these pieces.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod value;

pub use config::{
    is_valid_max_number, is_valid_max_tries, Configuration, ConfigurationBuilder, DEFAULT_MAX_NUMBER,
    DEFAULT_MAX_TRIES, MAX_TRIES_LIMIT,
};
pub use error::{GameError, GuessError, NotANumber};
pub use rng::GameRng;
pub use state::{GameState, Response, StateRecord};
pub use value::{is_integer, is_number, to_integer, validate_guess, Value};
