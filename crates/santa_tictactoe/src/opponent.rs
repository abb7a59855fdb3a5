//! Santa's move selection: minimax with a randomized difficulty blend.

use crate::search::minimax;
use crate::{Board, Position, Side};
use derive_getters::Getters;
use derive_new::new;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Probability that Santa plays a move with the shallow search.
pub const SOFT_CHANCE: f64 = 0.35;

/// Search depth picked for a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Difficulty {
    /// Shallow search (3 plies), gives the user a chance.
    Soft,
    /// Deep search (6 plies), near-perfect play.
    Deep,
}

impl Difficulty {
    /// Maximum search depth in plies.
    pub fn max_depth(self) -> u8 {
        match self {
            Difficulty::Soft => 3,
            Difficulty::Deep => 6,
        }
    }

    /// Draws a difficulty: `Soft` when a uniform value in `[0, 1)` is below
    /// [`SOFT_CHANCE`], `Deep` otherwise.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random::<f64>() < SOFT_CHANCE {
            Difficulty::Soft
        } else {
            Difficulty::Deep
        }
    }
}

/// A move chosen for Santa, with the difficulty that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct SantaMove {
    /// Square to mark.
    position: Position,
    /// Difficulty rolled for this move.
    difficulty: Difficulty,
}

/// Picks Santa's next move on `board`.
///
/// Returns `None` only when no square is empty. If the search produces no
/// move the choice falls back to a uniformly random empty square.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<SantaMove> {
    let available: Vec<Position> = board.empty_positions().collect();
    if available.is_empty() {
        debug!("No empty square for Santa");
        return None;
    }

    let difficulty = Difficulty::roll(rng);
    let result = minimax(board, Side::Santa, 0, difficulty.max_depth());
    let position = match *result.best() {
        Some(pos) => pos,
        None => *available.choose(rng)?,
    };

    debug!(%difficulty, %position, score = *result.score(), "Santa chose a move");
    Some(SantaMove::new(position, difficulty))
}

/// Something that can pick Santa's move.
///
/// The state machine calls this exactly once per Santa turn, with a board
/// that is still in progress.
pub trait Opponent {
    /// Chooses a move on `board`, `None` when no square is free.
    fn choose_move(&mut self, board: &Board) -> Option<SantaMove>;
}

/// Santa backed by the blended minimax and his own random source.
#[derive(Debug, Clone)]
pub struct Santa<R = StdRng> {
    rng: R,
}

impl<R: Rng> Santa<R> {
    /// Creates Santa around a random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Santa<StdRng> {
    /// Santa seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Santa with a fixed seed, for reproducible rounds.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for Santa<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng> Opponent for Santa<R> {
    fn choose_move(&mut self, board: &Board) -> Option<SantaMove> {
        choose_move(board, &mut self.rng)
    }
}
