//! Santa Games - terminal front end for Santa tic-tac-toe.
//!
//! - **Config**: TOML settings for Santa's thinking delay, seed and log file
//! - **TUI**: ratatui board that drives Santa's turns on a timer
//! - **Reports**: batch runs of the difficulty blend and of simulated rounds

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod report;
pub mod tui;

pub use config::{ConfigError, GameConfig};
pub use report::{run_blend, run_simulation, BlendReport, SimulationReport};
