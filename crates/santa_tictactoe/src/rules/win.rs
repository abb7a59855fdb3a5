//! Win detection.

use crate::{Board, Position, Side, Square};

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the side holding all three squares of some line.
///
/// Lines are scanned in order, so on a malformed board with two winners the
/// first line found decides.
pub fn winner(board: &Board) -> Option<Side> {
    LINES.iter().find_map(|[a, b, c]| match board.get(*a) {
        Square::Occupied(side) if board.get(*b) == board.get(*a) && board.get(*c) == board.get(*a) => {
            Some(side)
        }
        _ => None,
    })
}
