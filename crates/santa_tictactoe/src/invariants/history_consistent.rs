//! History consistency: the board is exactly the history's marks.

use super::Invariant;
use crate::{Board, Game};

/// Replaying the history onto an empty board yields the current board.
pub struct HistoryConsistentInvariant;

impl<O> Invariant<Game<O>> for HistoryConsistentInvariant {
    fn holds(game: &Game<O>) -> bool {
        let mut rebuilt = Board::new();
        for mov in game.history() {
            if rebuilt.is_occupied(mov.position) {
                return false;
            }
            rebuilt = rebuilt.with(mov.position, mov.side);
        }
        rebuilt == *game.board()
    }

    fn description() -> &'static str {
        "Board matches the recorded moves"
    }
}
