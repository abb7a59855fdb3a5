//! Santa Games - play tic-tac-toe against Santa, or batch-run his search.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use santa_games::{GameConfig, run_blend, run_simulation};
use santa_tictactoe::Santa;
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config } => run_play(config).await,
        Command::Blend { trials, seed, json } => {
            init_stderr_logging()?;
            let mut rng = rng_for(seed);
            print_report(&run_blend(trials, &mut rng), json)
        }
        Command::Simulate { rounds, seed, json } => {
            init_stderr_logging()?;
            let santa = match seed {
                Some(seed) => Santa::seeded(seed),
                None => Santa::from_os_rng(),
            };
            let mut player_rng = rng_for(seed.map(|s| s.wrapping_add(1)));
            print_report(&run_simulation(rounds, santa, &mut player_rng), json)
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {}", e))
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn print_report<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// Runs the terminal game, logging to a file so the board stays clean.
async fn run_play(config_path: PathBuf) -> Result<()> {
    let config = GameConfig::load_or_default(&config_path)?;

    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("creating log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {}", e))?;

    info!(config = %config_path.display(), "Starting Santa Games");
    santa_games::tui::run(config).await
}
