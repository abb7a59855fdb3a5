//! Round state machine tests.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use santa_tictactoe::invariants::{InvariantSet, RoundInvariants};
use santa_tictactoe::{
    evaluate, Board, Game, MoveRejection, Outcome, Position, Santa, Side, Snapshot,
};

fn positions(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .map(|&i| Position::from_index(i).expect("index in range"))
        .collect()
}

#[test]
fn test_player_completes_top_row() {
    let mut game = Game::with_opponent(Santa::seeded(1));
    // X 0, O 3, X 1, O 4 -> XX_ OO_ ___ with the Player to move.
    game.replay(Side::Player, &positions(&[0, 3, 1, 4])).expect("legal sequence");
    assert_eq!(*game.board(), "XX_OO____".parse::<Board>().unwrap());
    assert_eq!(game.turn(), Side::Player);

    let snap = game.select_cell(Position::TopRight).expect("square is free");
    assert_eq!(*snap.outcome(), Outcome::PlayerWon);
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let mut game = Game::with_opponent(Santa::seeded(1));
    // Ends on X O X / X O O / O X X.
    let snap = game
        .replay(Side::Player, &positions(&[0, 1, 2, 4, 3, 5, 7, 6, 8]))
        .expect("legal sequence");
    assert_eq!(*snap.outcome(), Outcome::Drawn);
    assert_eq!(snap.board().filled(), 9);
}

#[test]
fn test_rejected_moves_change_nothing() {
    let mut game = Game::with_opponent(Santa::seeded(9));
    game.select_cell(Position::Center).unwrap();
    game.advance_santa().unwrap();

    let before: Snapshot = game.snapshot();
    let history_before = game.history().to_vec();

    assert_eq!(
        game.select_cell(Position::Center),
        Err(MoveRejection::SquareOccupied(Position::Center))
    );
    assert_eq!(game.select_index(42), Err(MoveRejection::OutOfBounds(42)));
    assert_eq!(
        game.advance_santa(),
        Err(MoveRejection::NotYourTurn(Side::Santa))
    );

    assert_eq!(game.snapshot(), before);
    assert_eq!(game.history(), history_before.as_slice());
}

#[test]
fn test_rejection_after_round_end_changes_nothing() {
    let mut game = Game::with_opponent(Santa::seeded(9));
    game.replay(Side::Player, &positions(&[0, 3, 1, 4, 2])).unwrap();
    assert_eq!(game.outcome(), Outcome::PlayerWon);

    let before = game.snapshot();
    assert_eq!(
        game.select_cell(Position::BottomRight),
        Err(MoveRejection::GameOver)
    );
    assert_eq!(game.advance_santa(), Err(MoveRejection::GameOver));
    assert!(game.schedule_santa().is_none());
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_consecutive_resets_alternate_starter() {
    let mut game = Game::with_opponent(Santa::seeded(3));
    let first = *game.reset_round().turn();
    let second = *game.reset_round().turn();
    assert_ne!(first, second);
}

#[test]
fn test_reset_clears_board_from_any_state() {
    let mut game = Game::with_opponent(Santa::seeded(3));
    game.select_cell(Position::TopLeft).unwrap();
    let snap = game.reset_round();
    assert_eq!(snap.board().filled(), 0);
    assert_eq!(*snap.outcome(), Outcome::InProgress);
    assert!(game.history().is_empty());
    assert!(game.last_santa_move().is_none());
}

/// Plays a round with a random Player against seeded Santa.
fn play_random_round(game: &mut Game, rng: &mut StdRng) {
    while !game.outcome().is_terminal() {
        match game.turn() {
            Side::Player => {
                let free: Vec<Position> = game.board().empty_positions().collect();
                let pos = *free.choose(rng).expect("open round has a free square");
                game.select_cell(pos).unwrap();
            }
            Side::Santa => {
                game.advance_santa().unwrap();
            }
        }

        let board = game.board();
        let starter = game.starting_side();
        let diff = board.count(starter) as i32 - board.count(starter.other()) as i32;
        assert!(diff == 0 || diff == 1, "unbalanced board {}", board);
        assert!(RoundInvariants::check_all(&*game).is_ok());
    }
}

#[test]
fn test_random_rounds_keep_marks_balanced() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut game = Game::with_opponent(Santa::seeded(78));
    for _ in 0..40 {
        play_random_round(&mut game, &mut rng);
        assert_eq!(game.outcome(), evaluate(game.board()));
        game.reset_round();
    }
}

#[test]
fn test_replaying_history_reproduces_outcome() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut game = Game::with_opponent(Santa::seeded(6));
    for _ in 0..10 {
        game.reset_round();
        let starter = game.starting_side();
        play_random_round(&mut game, &mut rng);
        let recorded: Vec<Position> = game.history().iter().map(|m| m.position).collect();
        let outcome = game.outcome();
        let board = *game.board();

        // The reset hands the opening to the other side; replay restores it.
        game.reset_round();
        assert_ne!(game.starting_side(), starter);
        let snap = game
            .replay(starter, &recorded)
            .expect("recorded moves are legal");
        assert_eq!(*snap.outcome(), outcome);
        assert_eq!(*snap.board(), board);
        assert_eq!(game.starting_side(), starter);
    }
}

#[test]
fn test_replay_after_single_reset_keeps_winner() {
    let mut game = Game::with_opponent(Santa::seeded(2));
    let moves = positions(&[0, 3, 1, 4, 2]);
    let first = game.replay(Side::Player, &moves).unwrap();
    assert_eq!(*first.outcome(), Outcome::PlayerWon);

    game.reset_round();
    assert_eq!(game.starting_side(), Side::Santa);
    let again = game.replay(Side::Player, &moves).unwrap();
    assert_eq!(*again.outcome(), Outcome::PlayerWon);
    assert_eq!(again.board(), first.board());
    assert_eq!(*again.round(), 1);
}

#[test]
fn test_santa_opens_odd_rounds() {
    let mut game = Game::with_opponent(Santa::seeded(12));
    game.reset_round();
    assert!(game.is_santa_due());
    assert_eq!(
        game.select_cell(Position::Center),
        Err(MoveRejection::NotYourTurn(Side::Player))
    );
    let ticket = game.schedule_santa().expect("Santa opens");
    assert_eq!(ticket.round(), 1);
    let snap = game.advance_santa_for(ticket).unwrap();
    assert_eq!(snap.board().count(Side::Santa), 1);
    assert_eq!(*snap.turn(), Side::Player);
}

#[test]
fn test_snapshot_serializes() {
    let game = Game::with_opponent(Santa::seeded(1));
    let json = serde_json::to_string(&game.snapshot()).unwrap();
    assert!(json.contains("\"turn\":\"Player\""));
    assert!(json.contains("\"outcome\":\"InProgress\""));
}
