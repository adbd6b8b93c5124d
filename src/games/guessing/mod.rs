//! Number guessing game.
//!
//! A secret target is drawn in `[1, max_number]`:
//! - Each valid guess uses one try and returns "higher" or "lower"
//! - Guessing the target wins, even on the last try
//! - Running out of tries loses
//! - Invalid guesses are reported and do not use a try

mod game;

pub use game::{create_game, GuessingGame, GuessingGameBuilder};
