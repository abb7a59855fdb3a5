//! Batch runs: how often Santa plays soft, and how rounds end.

use derive_getters::Getters;
use derive_new::new;
use rand::seq::IndexedRandom;
use rand::Rng;
use santa_tictactoe::{choose_move, Board, Difficulty, Game, Opponent, Outcome, Side};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, instrument};

/// Split between soft and deep searches over many first moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, new)]
pub struct BlendReport {
    /// Moves chosen.
    trials: u32,
    /// Moves chosen with the shallow search.
    soft: u32,
    /// Moves chosen with the deep search.
    deep: u32,
}

impl BlendReport {
    /// Share of soft moves, 0 when no trials ran.
    pub fn soft_fraction(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            f64::from(self.soft) / f64::from(self.trials)
        }
    }
}

impl fmt::Display for BlendReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trials: {}", self.trials)?;
        writeln!(
            f,
            "Soft (depth {}): {} ({:.1}%)",
            Difficulty::Soft.max_depth(),
            self.soft,
            self.soft_fraction() * 100.0
        )?;
        write!(
            f,
            "Deep (depth {}): {} ({:.1}%)",
            Difficulty::Deep.max_depth(),
            self.deep,
            (1.0 - self.soft_fraction()) * 100.0
        )
    }
}

/// Asks Santa for an opening move on the empty board `trials` times.
#[instrument(skip(rng))]
pub fn run_blend<R: Rng + ?Sized>(trials: u32, rng: &mut R) -> BlendReport {
    let board = Board::new();
    let mut soft = 0;
    let mut deep = 0;
    for _ in 0..trials {
        match choose_move(&board, rng).map(|m| *m.difficulty()) {
            Some(Difficulty::Soft) => soft += 1,
            Some(Difficulty::Deep) => deep += 1,
            None => {}
        }
    }
    let report = BlendReport::new(trials, soft, deep);
    info!(soft, deep, "Blend run finished");
    report
}

/// Tally of simulated rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Getters)]
pub struct SimulationReport {
    /// Rounds played.
    rounds: u32,
    /// Rounds the random Player won.
    player_wins: u32,
    /// Rounds Santa won.
    santa_wins: u32,
    /// Drawn rounds.
    draws: u32,
}

impl SimulationReport {
    fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::PlayerWon => self.player_wins += 1,
            Outcome::SantaWon => self.santa_wins += 1,
            Outcome::Drawn => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rounds: {}", self.rounds)?;
        writeln!(f, "Player wins: {}", self.player_wins)?;
        writeln!(f, "Santa wins: {}", self.santa_wins)?;
        write!(f, "Draws: {}", self.draws)
    }
}

/// Plays `rounds` rounds of a uniformly random Player against `opponent`.
///
/// Starters alternate as in the interactive game.
#[instrument(skip(opponent, player_rng))]
pub fn run_simulation<O, R>(rounds: u32, opponent: O, player_rng: &mut R) -> SimulationReport
where
    O: Opponent,
    R: Rng + ?Sized,
{
    let mut game = Game::with_opponent(opponent);
    let mut report = SimulationReport::default();

    for round in 0..rounds {
        if round > 0 {
            game.reset_round();
        }
        while !game.outcome().is_terminal() {
            let result = match game.turn() {
                Side::Player => {
                    let free: Vec<_> = game.board().empty_positions().collect();
                    match free.choose(player_rng) {
                        Some(&pos) => game.select_cell(pos),
                        None => break,
                    }
                }
                Side::Santa => game.advance_santa(),
            };
            if let Err(reason) = result {
                debug!(%reason, "Simulated move rejected");
                break;
            }
        }
        report.record(game.outcome());
    }

    info!(
        player_wins = report.player_wins,
        santa_wins = report.santa_wins,
        draws = report.draws,
        "Simulation finished"
    );
    report
}
