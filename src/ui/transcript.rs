//! JSON transcript of a finished session.
//!
//! Captures the configuration, the seed the target was drawn from and the
//! final state with its full history, so a game can be audited or replayed.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::{Configuration, GameState};

/// Everything needed to audit or replay a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub max_number: i64,
    pub max_tries: i64,
    /// Seed of the target draw. Rebuilding with this seed yields the same target.
    pub seed: u64,
    /// "won", "lost", or "unfinished".
    pub outcome: String,
    pub state: GameState,
}

impl Transcript {
    pub fn new(config: &Configuration, seed: u64, state: GameState) -> Self {
        let outcome = if state.have_won() {
            "won"
        } else if state.have_lost() {
            "lost"
        } else {
            "unfinished"
        };

        Self {
            max_number: config.max_number(),
            max_tries: config.max_tries(),
            seed,
            outcome: outcome.to_string(),
            state,
        }
    }

    /// Write as pretty-printed JSON.
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()
    }
}
