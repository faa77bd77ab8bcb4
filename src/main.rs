//! Lights Out - terminal game
//!
//! Shows the instructions, generates a random board and plays until the
//! player switches every light off or types `exit`.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::{CommandFactory, Parser, error::ErrorKind};
use cli::Cli;
use lights_out::{ConsoleRenderer, ConsoleSource, GameSession, INSTRUCTIONS, Outcome};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => Cli::command()
            .error(ErrorKind::ValueValidation, err.message)
            .exit(),
    };
    info!(size = *config.size(), seed = ?config.seed(), "Starting Lights Out");

    let mut rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };
    let mut session = GameSession::with_random_board(*config.size(), &mut rng)?;

    let mut renderer = ConsoleRenderer::new(std::io::stdout());
    renderer.message(INSTRUCTIONS)?;

    let mut source = ConsoleSource::new(std::io::stdin().lock(), std::io::stdout());
    let outcome = session.run(&mut renderer, &mut source)?;

    match outcome {
        Outcome::Won { moves } => renderer.message(&format!(
            "\nCongratulations, all the lights are off! Solved in {} move{}.",
            moves,
            if moves == 1 { "" } else { "s" }
        ))?,
        Outcome::Quit => renderer.message(&format!(
            "\nGoodbye. {} light{} still on.",
            session.board().lit_count(),
            if session.board().lit_count() == 1 { " was" } else { "s were" }
        ))?,
    }

    debug!(?outcome, "Session finished");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
