//! guessnum CLI - play the number guessing game in a terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use guessnum::io::TerminalIO;
use guessnum::ui::{run_session, Presenter, Transcript};
use guessnum::{Configuration, GuessingGameBuilder, Value};

/// Guess the hidden number before running out of tries
#[derive(Parser, Debug)]
#[command(name = "guessnum")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Largest number that can be drawn (default: 30)
    #[arg(short = 'n', long)]
    max_number: Option<String>,

    /// Number of tries before the game is lost (default: 10)
    #[arg(short = 't', long)]
    max_tries: Option<String>,

    /// Random seed for the hidden number (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Write the finished game as JSON to this file
    #[arg(long)]
    transcript: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Configuration::builder()
        .max_number(args.max_number.as_deref().map(Value::parse))
        .max_tries(args.max_tries.as_deref().map(Value::parse))
        .build()
        .context("invalid configuration")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "seed selected");

    let game = GuessingGameBuilder::new(config)
        .seed(seed)
        .build()
        .context("could not create game")?;

    let presenter = Presenter::new(!args.no_color);
    let mut terminal = TerminalIO;
    let mut output = TerminalIO;
    let state = run_session(&game, &presenter, &mut terminal, &mut output)?;

    if let Some(path) = &args.transcript {
        Transcript::new(&config, seed, state)
            .write_to(path)
            .with_context(|| format!("could not write transcript to {}", path.display()))?;
        info!(path = %path.display(), "transcript written");
    }

    Ok(())
}
