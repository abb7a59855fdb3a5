//! Round state machine.
//!
//! [`Game`] owns the board, the turn and the outcome of the current round.
//! The user moves through [`Game::select_cell`]; Santa moves when the front
//! end calls [`Game::advance_santa`] (directly, or through a
//! [`SantaTicket`] after a delay). Every reset starts a new round with the
//! other side opening.

use super::action::{Move, MoveRejection};
use super::contracts::{LegalMove, RoundInProgress};
use super::invariants::{InvariantSet, RoundInvariants};
use super::opponent::{Opponent, Santa, SantaMove};
use super::rules::evaluate;
use super::{Board, Outcome, Position, Side};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Read-only view of a round for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// Side to move (the last mover once the round is over).
    turn: Side,
    /// Round outcome.
    outcome: Outcome,
    /// Round counter, 0 for the first round.
    round: u64,
}

/// Proof that Santa was due at a given round and ply.
///
/// Taken with [`Game::schedule_santa`] before a thinking delay and redeemed
/// with [`Game::advance_santa_for`]. A ticket from before a reset, or from
/// before another move, is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SantaTicket {
    round: u64,
    ply: usize,
}

impl SantaTicket {
    /// Round the ticket was issued in.
    pub fn round(&self) -> u64 {
        self.round
    }
}

#[derive(Debug, Clone)]
struct RoundState {
    starter: Side,
    board: Board,
    turn: Side,
    outcome: Outcome,
    history: Vec<Move>,
}

impl RoundState {
    fn new(starter: Side) -> Self {
        Self {
            starter,
            board: Board::new(),
            turn: starter,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    fn snapshot(&self, round: u64) -> Snapshot {
        Snapshot::new(self.board, self.turn, self.outcome, round)
    }

    /// Applies a move that already passed [`LegalMove`].
    fn apply(&mut self, mov: Move) {
        self.board = self.board.with(mov.position, mov.side);
        self.history.push(mov);
        self.outcome = evaluate(&self.board);
        if !self.outcome.is_terminal() {
            self.turn = mov.side.other();
        }
    }
}

/// Santa tic-tac-toe game: the current round plus the round counter.
///
/// Rounds with an even counter open with the Player, odd ones with Santa.
/// Invalid requests return a [`MoveRejection`] and leave the game exactly
/// as it was.
#[derive(Debug, Clone)]
pub struct Game<O = Santa> {
    state: RoundState,
    round: u64,
    last_santa_move: Option<SantaMove>,
    opponent: O,
}

impl Game<Santa> {
    /// Creates a game against Santa seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self::with_opponent(Santa::from_os_rng())
    }
}

impl Default for Game<Santa> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Game<O> {
    /// Creates a game at round 0 (Player opens) against the given opponent.
    pub fn with_opponent(opponent: O) -> Self {
        Self {
            state: RoundState::new(Self::starter_for(0)),
            round: 0,
            last_santa_move: None,
            opponent,
        }
    }

    /// Builds a game in an arbitrary state, bypassing every check.
    #[cfg(test)]
    pub(crate) fn from_parts(
        starter: Side,
        board: Board,
        turn: Side,
        history: Vec<Move>,
        opponent: O,
    ) -> Self {
        Self {
            state: RoundState {
                starter,
                board,
                turn,
                outcome: evaluate(&board),
                history,
            },
            round: 0,
            last_santa_move: None,
            opponent,
        }
    }

    fn starter_for(round: u64) -> Side {
        if round % 2 == 0 {
            Side::Player
        } else {
            Side::Santa
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Side to move.
    pub fn turn(&self) -> Side {
        self.state.turn
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Round counter.
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Side that opened the current round.
    pub fn starting_side(&self) -> Side {
        self.state.starter
    }

    /// Moves of the current round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.state.history
    }

    /// Santa's most recent move this round.
    pub fn last_santa_move(&self) -> Option<SantaMove> {
        self.last_santa_move
    }

    /// The opponent.
    pub fn opponent(&self) -> &O {
        &self.opponent
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot(self.round)
    }

    /// True when the round is open and Santa is to move.
    pub fn is_santa_due(&self) -> bool {
        self.state.outcome == Outcome::InProgress && self.state.turn == Side::Santa
    }

    /// Takes a ticket for Santa's pending move, if Santa is due.
    pub fn schedule_santa(&self) -> Option<SantaTicket> {
        self.is_santa_due().then(|| SantaTicket {
            round: self.round,
            ply: self.state.history.len(),
        })
    }

    /// Starts a new round. The side that did not open the previous round opens this one.
    #[instrument(skip(self), fields(previous_round = self.round))]
    pub fn reset_round(&mut self) -> Snapshot {
        self.round += 1;
        self.state = RoundState::new(Self::starter_for(self.round));
        self.last_santa_move = None;
        info!(round = self.round, starter = %self.state.turn, "New round");
        self.snapshot()
    }

    /// Rebuilds the current round from an empty board, `starter` moving
    /// first and sides alternating, without consulting the opponent.
    ///
    /// The round counter is unchanged. All or nothing: if any position is
    /// illegal the game is left untouched.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn replay(
        &mut self,
        starter: Side,
        positions: &[Position],
    ) -> Result<Snapshot, MoveRejection> {
        let mut staged = RoundState::new(starter);
        for &position in positions {
            let mov = Move::new(staged.turn, position);
            LegalMove::check(&mov, &staged.snapshot(self.round))?;
            staged.apply(mov);
        }
        self.state = staged;
        self.last_santa_move = None;
        self.check_invariants();
        debug!(moves = positions.len(), outcome = %self.state.outcome, "Replayed moves");
        Ok(self.snapshot())
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            let result = RoundInvariants::check_all(self);
            if let Err(violations) = &result {
                for violation in violations {
                    warn!(%violation, "Round invariant violated");
                }
            }
            debug_assert!(result.is_ok(), "Round invariants violated: {:?}", result);
        }
    }
}

impl<O: Opponent> Game<O> {
    /// Places the Player's mark at `pos`.
    ///
    /// Legal only while the round is open, on the Player's turn and on an
    /// empty square. When the round stays open the turn passes to Santa.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn select_cell(&mut self, pos: Position) -> Result<Snapshot, MoveRejection> {
        let mov = Move::new(Side::Player, pos);
        if let Err(reason) = LegalMove::check(&mov, &self.snapshot()) {
            debug!(%reason, "Ignoring player move");
            return Err(reason);
        }

        self.state.apply(mov);
        self.check_invariants();
        debug!(%mov, outcome = %self.state.outcome, "Player moved");
        Ok(self.snapshot())
    }

    /// Index form of [`Game::select_cell`]; indices outside 0-8 are rejected.
    pub fn select_index(&mut self, index: usize) -> Result<Snapshot, MoveRejection> {
        let pos = Position::from_index(index).ok_or(MoveRejection::OutOfBounds(index))?;
        self.select_cell(pos)
    }

    /// Asks the opponent for one move and applies it.
    ///
    /// Legal only while the round is open on Santa's turn.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn advance_santa(&mut self) -> Result<Snapshot, MoveRejection> {
        let snapshot = self.snapshot();
        RoundInProgress::check(&snapshot)?;
        if self.state.turn != Side::Santa {
            return Err(MoveRejection::NotYourTurn(Side::Santa));
        }

        let choice = self
            .opponent
            .choose_move(&self.state.board)
            .ok_or(MoveRejection::NoMoveAvailable)?;
        let mov = Move::new(Side::Santa, *choice.position());
        LegalMove::check(&mov, &snapshot)?;

        self.state.apply(mov);
        self.last_santa_move = Some(choice);
        self.check_invariants();
        debug!(%mov, difficulty = %choice.difficulty(), outcome = %self.state.outcome, "Santa moved");
        Ok(self.snapshot())
    }

    /// Redeems a ticket from [`Game::schedule_santa`].
    ///
    /// Rejects with `StaleTicket` when a reset or another move happened since
    /// the ticket was taken.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn advance_santa_for(&mut self, ticket: SantaTicket) -> Result<Snapshot, MoveRejection> {
        if ticket.round != self.round || ticket.ply != self.state.history.len() {
            debug!(?ticket, "Dropping stale Santa move");
            return Err(MoveRejection::StaleTicket);
        }
        self.advance_santa()
    }
}
