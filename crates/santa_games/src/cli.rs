//! Command-line interface for santa_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Santa Games - tic-tac-toe against Santa in the terminal
#[derive(Parser, Debug)]
#[command(name = "santa_games")]
#[command(about = "Play tic-tac-toe against Santa", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; plays when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the TOML config file (defaults apply when missing)
        #[arg(long, default_value = "santa_games.toml")]
        config: PathBuf,
    },

    /// Measure how often Santa uses the soft search
    Blend {
        /// Number of opening moves to sample
        #[arg(long, default_value = "10000")]
        trials: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play rounds of a random Player against Santa
    Simulate {
        /// Number of rounds to play
        #[arg(long, default_value = "1000")]
        rounds: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: PathBuf::from("santa_games.toml"),
        }
    }
}
