//! Moves and move rejections.

use super::{Position, Side};
use serde::{Deserialize, Serialize};

/// A side placing its mark at a position.
///
/// Moves are recorded in the round history and can be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// The position where the side places its mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, position: Position) -> Self {
        Self { side, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position.label())
    }
}

/// Why a requested move was ignored.
///
/// A rejected request never changes the game. The front end may show the
/// reason or simply drop it, since illegal clicks are expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The round already has an outcome.
    #[display("Round is already over")]
    GameOver,

    /// The given side asked to move out of turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Side),

    /// The square already holds a mark.
    #[display("{} is already taken", _0)]
    SquareOccupied(Position),

    /// Index outside 0-8.
    #[display("No square at index {}", _0)]
    OutOfBounds(usize),

    /// A scheduled Santa move no longer matches the current round or ply.
    #[display("Scheduled move belongs to an earlier position")]
    StaleTicket,

    /// Santa had no square to play.
    #[display("No move available")]
    NoMoveAvailable,
}

impl std::error::Error for MoveRejection {}
