//! Application state for the terminal game.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use santa_tictactoe::{
    result_text, status_text, Game, Opponent, Position, Santa, SantaTicket, Side,
};
use tracing::{debug, info};

/// Terminal game state: the game, the cursor and Santa's pending move.
pub struct App<O = Santa> {
    game: Game<O>,
    cursor: Position,
    pending: Option<SantaTicket>,
    note: Option<String>,
    should_quit: bool,
}

impl<O: Opponent> App<O> {
    /// Creates the app around a game.
    pub fn new(game: Game<O>) -> Self {
        Self {
            game,
            cursor: Position::Center,
            pending: None,
            note: None,
            should_quit: false,
        }
    }

    /// The game.
    pub fn game(&self) -> &Game<O> {
        &self.game
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True while Santa's move is scheduled but not applied.
    pub fn is_santa_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.new_round(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(pos) = digit_position(other) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
        }
    }

    fn place(&mut self, pos: Position) {
        match self.game.select_cell(pos) {
            Ok(_) => self.note = None,
            Err(reason) => debug!(%reason, "Ignored selection"),
        }
    }

    fn new_round(&mut self) {
        self.pending = None;
        self.note = None;
        let snap = self.game.reset_round();
        info!(round = snap.round(), starter = %snap.turn(), "Round reset from keyboard");
    }

    /// Takes a ticket when Santa is due and no move is pending.
    ///
    /// The caller delivers the ticket back through [`App::santa_ready`]
    /// after the thinking pause.
    pub fn take_santa_ticket(&mut self) -> Option<SantaTicket> {
        if self.pending.is_some() {
            return None;
        }
        let ticket = self.game.schedule_santa()?;
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Applies a ticket whose pause has elapsed. Stale tickets are dropped.
    pub fn santa_ready(&mut self, ticket: SantaTicket) {
        if self.pending == Some(ticket) {
            self.pending = None;
        }
        match self.game.advance_santa_for(ticket) {
            Ok(_) => {
                self.note = self.game.last_santa_move().map(|m| {
                    format!("Santa played {} ({} search)", m.position(), m.difficulty())
                });
            }
            Err(reason) => debug!(%reason, "Dropped Santa move"),
        }
    }

    /// Status line text.
    pub fn status(&self) -> String {
        let base = status_text(self.game.outcome(), self.is_santa_thinking());
        match (&self.note, self.game.outcome().is_terminal()) {
            (Some(note), false) => format!("{} - {}", note, base),
            _ => base.to_string(),
        }
    }

    /// Result banner once the round is over.
    pub fn banner(&self) -> Option<&'static str> {
        result_text(self.game.outcome())
    }

    /// Short line naming who opened the round.
    pub fn round_line(&self) -> String {
        let opener = match self.game.starting_side() {
            Side::Player => "You open",
            Side::Santa => "Santa opens",
        };
        format!("Round {} - {}", self.game.round() + 1, opener)
    }
}
