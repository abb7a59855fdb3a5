//! Player-facing texts for the status line and the result banner.

use super::Outcome;

/// Status line for the current round.
///
/// `santa_thinking` is set by the front end while Santa's move is pending.
pub fn status_text(outcome: Outcome, santa_thinking: bool) -> &'static str {
    match outcome {
        Outcome::PlayerWon => "You win! Santa tips his hat 🎩",
        Outcome::SantaWon => "Santa wins! Better luck next time ❄️",
        Outcome::Drawn => "It's a draw! Peace on earth ✨",
        Outcome::InProgress if santa_thinking => "Santa is thinking...",
        Outcome::InProgress => "Your turn! Place an X",
    }
}

/// Banner shown once a round is over.
pub fn result_text(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::PlayerWon => Some("You won! HO HO HO!"),
        Outcome::SantaWon => Some("Santa won! HO HO HO!"),
        Outcome::Drawn => Some("Game drawn! HO HO HO!"),
        Outcome::InProgress => None,
    }
}
