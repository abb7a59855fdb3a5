//! Depth-limited minimax from Santa's point of view.

use crate::rules::evaluate;
use crate::{Board, Outcome, Position, Side};
use serde::{Deserialize, Serialize};

/// Score of a Santa win found at depth 0. Wins found deeper score less.
pub const WIN_SCORE: i32 = 10;

/// Result of a search: the best score and the move reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SearchResult {
    /// Score from Santa's point of view (positive favours Santa).
    score: i32,
    /// Best move for the side to move, `None` at a leaf.
    best: Option<Position>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self { score, best: None }
    }
}

/// Scores `board` with `to_move` about to play.
///
/// Santa wins score `WIN_SCORE - depth` so faster wins are preferred, Player
/// wins score `depth - WIN_SCORE` so losses are delayed, and draws score 0.
/// Once `depth >= max_depth` an unfinished position scores 0. Santa
/// maximises, the Player minimises, and ties keep the lowest index.
///
/// Children are explored on copies of the board; `board` itself is never
/// modified.
pub fn minimax(board: &Board, to_move: Side, depth: u8, max_depth: u8) -> SearchResult {
    match evaluate(board) {
        Outcome::SantaWon => return SearchResult::leaf(WIN_SCORE - i32::from(depth)),
        Outcome::PlayerWon => return SearchResult::leaf(i32::from(depth) - WIN_SCORE),
        Outcome::Drawn => return SearchResult::leaf(0),
        Outcome::InProgress => {}
    }
    if depth >= max_depth {
        return SearchResult::leaf(0);
    }

    let maximising = to_move == Side::Santa;
    let mut best_score = if maximising { i32::MIN } else { i32::MAX };
    let mut best = None;

    for pos in board.empty_positions() {
        let child = board.with(pos, to_move);
        let score = minimax(&child, to_move.other(), depth + 1, max_depth).score;

        let improves = if maximising {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best = Some(pos);
        }
    }

    SearchResult {
        score: best_score,
        best,
    }
}
