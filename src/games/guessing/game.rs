//! Guessing game implementation.

use tracing::{debug, info, instrument, trace, warn};

use crate::core::{
    validate_guess, Configuration, GameError, GameRng, GameState, Response, StateRecord, Value,
};
use crate::rules::RulesEngine;

/// A single game: a fixed secret target and the rules that judge guesses.
///
/// Built once per game by [`GuessingGameBuilder`] or [`create_game`]. The
/// engine holds no mutable state; every call to `play` derives a new
/// [`GameState`] from the one passed in.
#[derive(Clone, Debug)]
pub struct GuessingGame {
    config: Configuration,
    target: i64,
    initial_state: GameState,
}

/// Builder for creating a GuessingGame.
#[derive(Clone, Debug, Default)]
pub struct GuessingGameBuilder {
    config: Configuration,
    seed: Option<u64>,
}

impl GuessingGameBuilder {
    pub fn new(config: Configuration) -> Self {
        Self { config, seed: None }
    }

    /// Draw the target from a seeded RNG instead of OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw the target and build the game.
    #[instrument(level = "debug", skip(self), fields(seed = ?self.seed))]
    pub fn build(self) -> Result<GuessingGame, GameError> {
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let target = rng
            .random_integer(&Value::Int(self.config.max_number()))
            .map_err(|err| {
                warn!(%err, "target generation failed");
                GameError::TargetGenerationFailed
            })?;

        info!(
            max_number = self.config.max_number(),
            max_tries = self.config.max_tries(),
            seed = rng.seed(),
            "game created"
        );

        GuessingGame::with_target(self.config, target)
    }
}

/// Build a game with a random target.
pub fn create_game(config: Configuration) -> Result<GuessingGame, GameError> {
    GuessingGameBuilder::new(config).build()
}

impl GuessingGame {
    /// Build a game around a known target.
    ///
    /// Fails with [`GameError::InvalidTarget`] unless `1 <= target <= max_number`.
    pub fn with_target(config: Configuration, target: i64) -> Result<Self, GameError> {
        if !(1..=config.max_number()).contains(&target) {
            return Err(GameError::InvalidTarget {
                target,
                max_number: config.max_number(),
            });
        }

        trace!(max_number = config.max_number(), "target chosen");

        Ok(Self {
            config,
            target,
            initial_state: GameState::initial(),
        })
    }

    /// Resolve a guess that passed validation.
    fn judge(&self, guess: i64, next_turn: u32) -> StateRecord {
        let mut record = StateRecord {
            turn: next_turn,
            ..StateRecord::default()
        };

        if guess == self.target {
            record.have_won = true;
        } else if i64::from(next_turn) == self.config.max_tries() {
            record.have_lost = true;
            record.response = Some(Response::MaxTriesExceeded {
                max_tries: self.config.max_tries(),
            });
        } else if guess < self.target {
            record.response = Some(Response::Higher);
        } else {
            record.response = Some(Response::Lower);
        }

        record
    }
}

impl RulesEngine for GuessingGame {
    fn config(&self) -> &Configuration {
        &self.config
    }

    fn initial_state(&self) -> &GameState {
        &self.initial_state
    }

    fn reveal_target(&self, state: &GameState) -> Option<i64> {
        state.end().then_some(self.target)
    }

    fn play(&self, guess: Value, previous: Option<&GameState>) -> GameState {
        let state = previous.unwrap_or(&self.initial_state);

        // Terminal states absorb everything
        if state.end() {
            debug!(turn = state.turn(), "play after game end ignored");
            return state.clone();
        }

        let mut record = match validate_guess(&guess, self.config.max_number()) {
            Ok(n) => self.judge(n, state.turn() + 1),
            Err(error) => {
                debug!(%guess, %error, "guess rejected");
                StateRecord {
                    turn: state.turn(),
                    error: Some(error),
                    ..StateRecord::default()
                }
            }
        };
        record.player_number = Some(guess);

        debug!(
            turn = record.turn,
            response = record.response.map(|r| r.as_str()),
            won = record.have_won,
            lost = record.have_lost,
            "guess resolved"
        );

        state.advance(record)
    }
}
