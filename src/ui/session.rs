//! Interactive game loop.
//!
//! One turn per prompt: read a line, hand it to the engine, render what the
//! new state says. The loop ends when the game does or input runs out.

use derive_more::{Display, Error, From};
use tracing::{info, instrument};

use super::presenter::Presenter;
use crate::core::{GameState, Value};
use crate::io::{InputReader, OutputWriter};
use crate::rules::RulesEngine;

/// Failure of the terminal session itself, never of a guess.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Reading or writing the terminal failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    /// The configuration could not be rendered.
    #[display("Serialization error: {_0}")]
    Json(serde_json::Error),
}

/// Play one game to completion against the given input and output.
///
/// Returns the last state reached: terminal when the game ended, otherwise
/// the state at the time input closed.
#[instrument(level = "debug", skip_all)]
pub fn run_session<R, I, O>(
    game: &R,
    presenter: &Presenter,
    input: &mut I,
    output: &mut O,
) -> Result<GameState, SessionError>
where
    R: RulesEngine,
    I: InputReader + ?Sized,
    O: OutputWriter + ?Sized,
{
    for line in presenter.banner(game.config())? {
        output.writeln(&line)?;
    }

    let mut state = game.initial_state().clone();

    loop {
        output.writeln("")?;

        let Some(line) = input.read_line(&presenter.prompt(state.turn() + 1))? else {
            info!(turn = state.turn(), "input closed before the game ended");
            output.writeln(&presenter.goodbye())?;
            return Ok(state);
        };

        state = game.play(Value::parse(&line), Some(&state));

        if let Some(error) = state.error() {
            output.writeln(&presenter.error(error))?;
        }

        if let Some(result) = game.outcome(&state) {
            info!(?result, "game over");
            let target = game.reveal_target(&state);
            for line in presenter.result(result, target, state.response()) {
                output.writeln(&line)?;
            }
            return Ok(state);
        }

        if let Some(response) = state.response() {
            output.writeln(&presenter.hint(response))?;
        }
    }
}
