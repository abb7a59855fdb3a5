//! Santa Tic-Tac-Toe - game core.
//!
//! A 3x3 game where the user (X) plays against Santa (O). Santa picks moves
//! with a depth-limited minimax search whose depth is drawn per move, so he
//! plays well most of the time and slips now and then.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Position`] and the pure
//!   [`rules`] (win, draw, [`evaluate`]).
//! - **Search opponent**: [`minimax`] plus the difficulty blend in
//!   [`choose_move`], wrapped by the [`Opponent`] trait and [`Santa`].
//! - **State machine**: [`Game`] owns the round, enforces turn order and
//!   alternates the starting side on every reset.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use santa_tictactoe::{Game, Outcome, Position, Santa, Side};
//!
//! let mut game = Game::with_opponent(Santa::new(StdRng::seed_from_u64(7)));
//! game.select_cell(Position::Center).expect("center is free");
//! assert_eq!(game.turn(), Side::Santa);
//!
//! let snapshot = game.advance_santa().expect("Santa is due");
//! assert_eq!(*snapshot.outcome(), Outcome::InProgress);
//! assert_eq!(game.turn(), Side::Player);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
pub mod invariants;
mod messages;
mod opponent;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveRejection};
pub use contracts::{LegalMove, RoundInProgress, SidesTurn, SquareIsEmpty};
pub use game::{Game, SantaTicket, Snapshot};
pub use messages::{result_text, status_text};
pub use opponent::{choose_move, Difficulty, Opponent, Santa, SantaMove, SOFT_CHANCE};
pub use position::Position;
pub use rules::{evaluate, LINES};
pub use search::{minimax, SearchResult, WIN_SCORE};
pub use types::{Board, BoardParseError, Outcome, Side, Square};
