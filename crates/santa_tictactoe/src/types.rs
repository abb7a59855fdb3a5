//! Core domain types for Santa tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two parties at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The user, playing X.
    Player,
    /// Santa, playing O.
    Santa,
}

impl Side {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Santa,
            Side::Santa => Side::Player,
        }
    }

    /// Symbol drawn on the board for this side.
    pub fn symbol(self) -> char {
        match self {
            Side::Player => 'X',
            Side::Santa => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Santa => write!(f, "Santa"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a side's mark.
    Occupied(Side),
}

/// 3x3 board, squares stored in row-major order (0-8).
///
/// The board is a small `Copy` value. Hypothetical moves are explored with
/// [`Board::with`], which never touches the board it is called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a raw index, `None` outside 0-8.
    pub fn get_index(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `side` marked at `pos`.
    pub fn with(&self, pos: Position, side: Side) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(side));
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if a square holds a mark.
    pub fn is_occupied(&self, pos: Position) -> bool {
        !self.is_empty(pos)
    }

    /// Index form of [`Board::is_occupied`]; out-of-range indices are never occupied.
    pub fn is_occupied_index(&self, index: usize) -> bool {
        matches!(self.get_index(index), Some(Square::Occupied(_)))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.is_empty(*pos))
    }

    /// Number of marks placed by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(side))
            .count()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact nine-character form, e.g. `XX_OO____`. Parses back with [`FromStr`].
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '_',
                Square::Occupied(side) => side.symbol(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character other than X, O or an empty marker.
    #[display("Invalid board character {:?}", _0)]
    InvalidCharacter(char),

    /// Not exactly nine squares.
    #[display("Board needs 9 squares, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Accepts `X`/`x`, `O`/`o` and `_`, `.` or `-` for empty; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let square = match c {
                'X' | 'x' => Square::Occupied(Side::Player),
                'O' | 'o' => Square::Occupied(Side::Santa),
                '_' | '.' | '-' => Square::Empty,
                other => return Err(BoardParseError::InvalidCharacter(other)),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

/// Outcome of a round, derived purely from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and empty squares remain.
    InProgress,
    /// The user completed a line.
    PlayerWon,
    /// Santa completed a line.
    SantaWon,
    /// Board full without a completed line.
    Drawn,
}

impl Outcome {
    /// True for every outcome except `InProgress`.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// The winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerWon => Some(Side::Player),
            Outcome::SantaWon => Some(Side::Santa),
            Outcome::InProgress | Outcome::Drawn => None,
        }
    }

    /// Outcome for a completed line by `side`.
    pub fn won_by(side: Side) -> Self {
        match side {
            Side::Player => Outcome::PlayerWon,
            Side::Santa => Outcome::SantaWon,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::PlayerWon => write!(f, "Player wins"),
            Outcome::SantaWon => write!(f, "Santa wins"),
            Outcome::Drawn => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled(), 0);
        assert_eq!(board.empty_positions().count(), 9);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with(Position::Center, Side::Santa);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Side::Santa));
    }

    #[test]
    fn test_is_occupied_index_bounds() {
        let board: Board = "X________".parse().unwrap();
        assert!(board.is_occupied_index(0));
        assert!(!board.is_occupied_index(1));
        assert!(!board.is_occupied_index(9));
    }

    #[test]
    fn test_parse_and_display_agree() {
        let board: Board = "XX_ OO_ ___".parse().unwrap();
        assert_eq!(board.to_string(), "XX_OO____");
        assert_eq!(board.count(Side::Player), 2);
        assert_eq!(board.count(Side::Santa), 2);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX_OO___".parse::<Board>(),
            Err(BoardParseError::WrongLength(8))
        );
        assert_eq!(
            "XX_OO___Z".parse::<Board>(),
            Err(BoardParseError::InvalidCharacter('Z'))
        );
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::PlayerWon.winner(), Some(Side::Player));
        assert_eq!(Outcome::won_by(Side::Santa), Outcome::SantaWon);
        assert_eq!(Outcome::Drawn.winner(), None);
        assert!(!Outcome::InProgress.is_terminal());
    }
}
