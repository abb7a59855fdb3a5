//! Alternating turns: history alternates from the starting side.

use super::Invariant;
use crate::Game;

/// Moves alternate sides starting with the round's starter, and while the
/// round is open the turn belongs to the side after the last move.
pub struct AlternatingTurnInvariant;

impl<O> Invariant<Game<O>> for AlternatingTurnInvariant {
    fn holds(game: &Game<O>) -> bool {
        let mut expected = game.starting_side();
        for mov in game.history() {
            if mov.side != expected {
                return false;
            }
            expected = expected.other();
        }
        game.outcome().is_terminal() || game.turn() == expected
    }

    fn description() -> &'static str {
        "Sides alternate, starting with the round's starter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Santa, Side};

    #[test]
    fn test_alternation_after_moves() {
        let mut game = Game::with_opponent(Santa::seeded(8));
        game.select_cell(Position::TopLeft).unwrap();
        game.advance_santa().unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.turn(), Side::Player);
    }
}
