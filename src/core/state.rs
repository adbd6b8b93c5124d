//! Game state.
//!
//! ## StateRecord
//!
//! One resolved point of a game:
//! - Turn counter and outcome flags
//! - The guess that produced it
//! - Guidance for the next guess, or the loss reason
//! - The validation error, if the guess was rejected
//!
//! ## GameState
//!
//! The current record plus the ordered history of every record produced so
//! far in the game. History uses an `im` persistent vector, so producing a
//! new state shares all prior entries with the previous one and cloning is
//! O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::GuessError;
use super::value::Value;

/// Guidance attached to a miss, or the reason for a loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Response {
    /// The target is higher than the guess.
    Higher,
    /// The target is lower than the guess.
    Lower,
    /// The try budget is spent.
    MaxTriesExceeded {
        /// The configured budget.
        max_tries: i64,
    },
}

impl Response {
    /// Short machine-readable tag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Response::Higher => "higher",
            Response::Lower => "lower",
            Response::MaxTriesExceeded { .. } => "max-tries-exceeded",
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Higher | Response::Lower => f.write_str(self.as_str()),
            Response::MaxTriesExceeded { max_tries } => {
                write!(f, "Max tries exceeded, it is the {max_tries}th turn")
            }
        }
    }
}

/// A single resolved point in a game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    /// Guesses resolved so far. Rejected guesses do not count.
    pub turn: u32,

    /// The target was found.
    pub have_won: bool,

    /// The try budget ran out.
    pub have_lost: bool,

    /// The guess that produced this record. `None` only before the first guess.
    pub player_number: Option<Value>,

    /// Guidance for the next guess, or the loss reason.
    pub response: Option<Response>,

    /// Why the guess was rejected, if it was.
    pub error: Option<GuessError>,
}

impl StateRecord {
    /// Won or lost.
    #[must_use]
    pub fn end(&self) -> bool {
        self.have_won || self.have_lost
    }
}

/// Immutable game state with full history.
///
/// Only the play engine produces states after the initial one; fields are
/// read through accessors and never change once built.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    current: StateRecord,
    history: Vector<StateRecord>,
}

impl GameState {
    /// The pristine state: turn 0, no flags, no guess, empty history.
    #[must_use]
    pub fn initial() -> Self {
        Self::default()
    }

    /// Build the successor of `self` from a freshly resolved record.
    ///
    /// The record is appended to a structurally shared copy of this state's
    /// history; `self` is left untouched.
    #[must_use]
    pub(crate) fn advance(&self, record: StateRecord) -> Self {
        let mut history = self.history.clone();
        history.push_back(record.clone());
        Self {
            current: record,
            history,
        }
    }

    /// The record for this point of the game.
    #[must_use]
    pub fn record(&self) -> &StateRecord {
        &self.current
    }

    /// Guesses resolved so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.current.turn
    }

    /// The target was found.
    #[must_use]
    pub fn have_won(&self) -> bool {
        self.current.have_won
    }

    /// The try budget ran out.
    #[must_use]
    pub fn have_lost(&self) -> bool {
        self.current.have_lost
    }

    /// The game is over. Further play returns this state unchanged.
    #[must_use]
    pub fn end(&self) -> bool {
        self.current.end()
    }

    /// The guess that produced this state.
    #[must_use]
    pub fn player_number(&self) -> Option<&Value> {
        self.current.player_number.as_ref()
    }

    /// Guidance for the next guess, or the loss reason.
    #[must_use]
    pub fn response(&self) -> Option<Response> {
        self.current.response
    }

    /// Why the guess was rejected, if it was.
    #[must_use]
    pub fn error(&self) -> Option<&GuessError> {
        self.current.error.as_ref()
    }

    /// Every record produced in this game, oldest first, ending with this one.
    #[must_use]
    pub fn history(&self) -> &Vector<StateRecord> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn miss(turn: u32, guess: i64, response: Response) -> StateRecord {
        StateRecord {
            turn,
            player_number: Some(Value::Int(guess)),
            response: Some(response),
            ..StateRecord::default()
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();

        assert_eq!(state.turn(), 0);
        assert!(!state.have_won());
        assert!(!state.have_lost());
        assert!(!state.end());
        assert!(state.player_number().is_none());
        assert!(state.response().is_none());
        assert!(state.error().is_none());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_advance_appends_and_preserves_previous() {
        let initial = GameState::initial();
        let first = initial.advance(miss(1, 5, Response::Higher));
        let second = first.advance(miss(2, 9, Response::Lower));

        assert!(initial.history().is_empty());
        assert_eq!(first.history().len(), 1);
        assert_eq!(second.history().len(), 2);

        assert_eq!(second.history()[0], *first.record());
        assert_eq!(second.history().back(), Some(second.record()));
        assert_eq!(first.turn(), 1);
        assert_eq!(second.turn(), 2);
    }

    #[test]
    fn test_end_flag() {
        let won = StateRecord {
            have_won: true,
            ..StateRecord::default()
        };
        let lost = StateRecord {
            have_lost: true,
            ..StateRecord::default()
        };

        assert!(won.end());
        assert!(lost.end());
        assert!(!StateRecord::default().end());
    }

    #[test]
    fn test_response_text() {
        assert_eq!(Response::Higher.as_str(), "higher");
        assert_eq!(Response::Lower.to_string(), "lower");

        let exceeded = Response::MaxTriesExceeded { max_tries: 10 };
        assert_eq!(exceeded.as_str(), "max-tries-exceeded");
        assert_eq!(exceeded.to_string(), "Max tries exceeded, it is the 10th turn");
    }

    #[test]
    fn test_state_serialization() {
        let state = GameState::initial()
            .advance(miss(1, 5, Response::Higher))
            .advance(miss(2, 9, Response::Lower));

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
