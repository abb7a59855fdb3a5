//! Preconditions for applying a move.
//!
//! Each check looks at a [`Snapshot`] and either passes or names the reason
//! the move must be ignored. [`LegalMove`] composes them in the order the
//! state machine reports rejections.

use super::action::{Move, MoveRejection};
use super::game::Snapshot;
use super::Outcome;
use tracing::{instrument, trace};

/// Precondition: the round has no outcome yet.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Fails with `GameOver` once the round has ended.
    #[instrument(level = "trace", skip(snapshot))]
    pub fn check(snapshot: &Snapshot) -> Result<(), MoveRejection> {
        if *snapshot.outcome() != Outcome::InProgress {
            Err(MoveRejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it is the moving side's turn.
pub struct SidesTurn;

impl SidesTurn {
    /// Fails with `NotYourTurn` when the move's side is not to move.
    #[instrument(level = "trace", skip(snapshot))]
    pub fn check(mov: &Move, snapshot: &Snapshot) -> Result<(), MoveRejection> {
        if mov.side != *snapshot.turn() {
            Err(MoveRejection::NotYourTurn(mov.side))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `SquareOccupied` when the square holds a mark.
    #[instrument(level = "trace", skip(snapshot))]
    pub fn check(mov: &Move, snapshot: &Snapshot) -> Result<(), MoveRejection> {
        if snapshot.board().is_occupied(mov.position) {
            Err(MoveRejection::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: round in progress, side to move, empty square.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(mov: &Move, snapshot: &Snapshot) -> Result<(), MoveRejection> {
        RoundInProgress::check(snapshot)?;
        SidesTurn::check(mov, snapshot)?;
        SquareIsEmpty::check(mov, snapshot)?;
        trace!(%mov, "Move is legal");
        Ok(())
    }
}
