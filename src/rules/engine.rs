//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - The configuration they were built from
//! - The pristine state a game starts in
//! - How a guess turns one state into the next

use crate::core::{Configuration, GameState, Value};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The target was found on this turn.
    Won { turns: u32 },
    /// The try budget ran out on this turn.
    Lost { turns: u32 },
}

impl GameResult {
    /// Check if the game was won.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, GameResult::Won { .. })
    }

    /// Turns played until the game ended.
    #[must_use]
    pub fn turns(&self) -> u32 {
        match self {
            GameResult::Won { turns } | GameResult::Lost { turns } => *turns,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `play` must not mutate the engine: every game-specific constant is
///   fixed at construction
/// - `play` on a terminal state returns that state unchanged
/// - `play` with `previous = None` starts from `initial_state`
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &Configuration;

    /// The state a game starts in.
    fn initial_state(&self) -> &GameState;

    /// Resolve one guess against the previous state.
    fn play(&self, guess: Value, previous: Option<&GameState>) -> GameState;

    /// The secret target, once `state` has ended. `None` while in progress.
    fn reveal_target(&self, state: &GameState) -> Option<i64>;

    // === Convenience Methods ===

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn outcome(&self, state: &GameState) -> Option<GameResult> {
        if state.have_won() {
            Some(GameResult::Won { turns: state.turn() })
        } else if state.have_lost() {
            Some(GameResult::Lost { turns: state.turn() })
        } else {
            None
        }
    }

    /// Play a sequence of guesses from the initial state.
    ///
    /// Guesses after the game ends are absorbed by the terminal state.
    fn replay<I>(&self, guesses: I) -> GameState
    where
        I: IntoIterator,
        I::Item: Into<Value>,
        Self: Sized,
    {
        guesses
            .into_iter()
            .fold(self.initial_state().clone(), |state, guess| {
                self.play(guess.into(), Some(&state))
            })
    }
}
