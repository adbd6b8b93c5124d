//! # guessnum
//!
//! A turn-based number guessing game built around an immutable state machine.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: every guess produces a new `GameState`; nothing
//!    is ever mutated after it is returned.
//!
//! 2. **Errors as Data**: an invalid guess is part of normal play. It is
//!    recorded on the resulting state instead of being returned as `Err`,
//!    and it does not use a try.
//!
//! 3. **Fail Fast at Construction**: invalid configuration never yields a
//!    partial game.
//!
//! ## Architecture
//!
//! - **Persistent History**: each state carries every record produced so far
//!   in an `im` vector, shared structurally between consecutive states.
//!
//! - **Deterministic Targets**: targets are drawn from a seedable ChaCha8 RNG,
//!   so a game can be reproduced from its seed.
//!
//! ## Modules
//!
//! - `core`: input values, validation, RNG, configuration, state, errors
//! - `rules`: RulesEngine trait
//! - `games`: the guessing game engine and its factory
//! - `io`: terminal input/output abstractions
//! - `ui`: presentation, interactive session, transcripts
//!
//! ## Example
//!
//! ```
//! use guessnum::{Configuration, GuessingGame, RulesEngine, Value};
//!
//! let config = Configuration::new(10, 3).unwrap();
//! let game = GuessingGame::with_target(config, 7).unwrap();
//!
//! let state = game.play(Value::Int(5), None);
//! assert_eq!(state.response().map(|r| r.as_str()), Some("higher"));
//!
//! let state = game.play(Value::Int(7), Some(&state));
//! assert!(state.have_won());
//! ```

pub mod core;
pub mod games;
pub mod io;
pub mod rules;
pub mod ui;

// Re-export commonly used types
pub use crate::core::{
    Configuration, ConfigurationBuilder, GameError, GameRng, GameState, GuessError, Response,
    StateRecord, Value,
};

pub use crate::games::guessing::{create_game, GuessingGame, GuessingGameBuilder};

pub use crate::rules::{GameResult, RulesEngine};
