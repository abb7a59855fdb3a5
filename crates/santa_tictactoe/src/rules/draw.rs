//! Draw detection.

use crate::{Board, Square};

/// Checks if every square holds a mark.
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
