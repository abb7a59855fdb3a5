//! Mark balance: the starting side is never behind and never more than one mark ahead.

use super::Invariant;
use crate::Game;

/// Marks of the starting side minus marks of the other side is 0 or 1.
pub struct MarkBalanceInvariant;

impl<O> Invariant<Game<O>> for MarkBalanceInvariant {
    fn holds(game: &Game<O>) -> bool {
        let starter = game.starting_side();
        let ahead = game.board().count(starter);
        let behind = game.board().count(starter.other());
        ahead == behind || ahead == behind + 1
    }

    fn description() -> &'static str {
        "Starting side has the same number of marks as the other side, or one more"
    }
}
