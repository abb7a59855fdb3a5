//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Both the search and the state machine
//! classify positions through [`evaluate`].

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{winner, LINES};

use crate::{Board, Outcome};
use tracing::instrument;

/// Classifies a board.
///
/// A completed line wins for the side holding it; otherwise a full board is
/// drawn and anything else is still in progress.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(side) = winner(board) {
        Outcome::won_by(side)
    } else if is_full(board) {
        Outcome::Drawn
    } else {
        Outcome::InProgress
    }
}
