//! Strictly Monty - command-line front end
//!
//! Interactive play and batch simulation of the Monty Hall game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_monty::{Decision, Format, GameConfig, GameEngine, Strategy, TerminalSession, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Play { json } => run_play(&config, json),
        Command::Simulate {
            strategy,
            rounds,
            json,
        } => run_simulate(&config, strategy.into(), rounds, json),
    }
}

/// Reads the config file (if any) and applies command-line overrides
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config = config.with_seed(Some(seed));
    }
    if let Some(policy) = cli.reveal_policy {
        config = config.with_reveal_policy(policy.into());
    }

    info!(?config, "Configuration resolved");
    Ok(config)
}

/// Run the interactive terminal game
#[instrument(skip(config))]
fn run_play(config: &GameConfig, json: bool) -> Result<()> {
    let engine = GameEngine::from_config(config);
    let format = if json { Format::Json } else { Format::Text };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = TerminalSession::new(engine, stdin.lock(), stdout.lock(), format);
    session.run()
}

/// Run a batch simulation and print the win rates
#[instrument(skip(config))]
fn run_simulate(config: &GameConfig, strategy: Strategy, rounds: Option<u64>, json: bool) -> Result<()> {
    let rounds = rounds.unwrap_or(*config.simulation_rounds());
    let mut engine = GameEngine::from_config(config);
    let mut player_rng = match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
        None => ChaCha8Rng::from_os_rng(),
    };

    let snapshot = simulate(&mut engine, &mut player_rng, strategy, rounds)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("Strategy: {} ({} rounds, host: {})", strategy, rounds, engine.reveal_policy());
        println!("Success rate when keeping: {}", snapshot.summary_line(Decision::Keep));
        println!("Success rate when switching: {}", snapshot.summary_line(Decision::Switch));
    }
    Ok(())
}
