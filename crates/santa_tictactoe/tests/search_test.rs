//! Search opponent tests: minimax soundness and the difficulty blend.

use rand::rngs::StdRng;
use rand::SeedableRng;
use santa_tictactoe::{
    choose_move, evaluate, minimax, Board, Difficulty, Outcome, Position, Side, SOFT_CHANCE,
};
use std::collections::HashSet;

/// Plies needed to fill any board, so the search never cuts off.
const FULL_DEPTH: u8 = 10;

/// Game-theoretic value from Santa's side: positive win, zero draw, negative loss.
fn true_value(board: &Board, to_move: Side) -> i32 {
    minimax(board, to_move, 0, FULL_DEPTH).score().signum()
}

/// Every open position reachable from an empty board with Santa to move.
fn santa_positions() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    let mut stack = vec![
        (Board::new(), Side::Player),
        (Board::new(), Side::Santa),
    ];

    while let Some((board, to_move)) = stack.pop() {
        if !seen.insert((board, to_move)) || evaluate(&board) != Outcome::InProgress {
            continue;
        }
        if to_move == Side::Santa {
            found.push(board);
        }
        for pos in board.empty_positions() {
            stack.push((board.with(pos, to_move), to_move.other()));
        }
    }
    found
}

#[test]
fn test_deep_search_never_gives_away_a_saveable_position() {
    let positions = santa_positions();
    assert!(positions.len() > 1000, "found {}", positions.len());

    for board in positions {
        if true_value(&board, Side::Santa) < 0 {
            continue;
        }
        let chosen = minimax(&board, Side::Santa, 0, Difficulty::Deep.max_depth())
            .best()
            .expect("open position has a move");
        let after = board.with(chosen, Side::Santa);
        assert!(
            true_value(&after, Side::Player) >= 0,
            "Santa lost a saveable position {} by playing {}",
            board,
            chosen
        );
    }
}

#[test]
fn test_deep_search_takes_forced_wins() {
    // O O _ / X X _ / X _ _ : Santa wins on 2.
    let board: Board = "OO_ XX_ X__".parse().unwrap();
    let result = minimax(&board, Side::Santa, 0, Difficulty::Deep.max_depth());
    assert_eq!(*result.best(), Some(Position::TopRight));
}

#[test]
fn test_center_opening_reply_is_safe() {
    let board = Board::new().with(Position::Center, Side::Player);
    let reply = minimax(&board, Side::Santa, 0, Difficulty::Deep.max_depth())
        .best()
        .expect("Santa has a reply");

    // An edge reply to a center opening loses; a corner holds.
    let corners = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];
    assert!(corners.contains(&reply), "Santa replied {}", reply);

    // However the Player continues, Santa is not forced into a loss within two Player moves.
    let after = board.with(reply, Side::Santa);
    let horizon = minimax(&after, Side::Player, 0, 4);
    assert!(*horizon.score() >= 0);
}

#[test]
fn test_choose_move_blend_from_empty_board() {
    let mut rng = StdRng::seed_from_u64(35);
    let board = Board::new();
    let trials = 500;

    let mut soft = 0;
    for _ in 0..trials {
        let chosen = choose_move(&board, &mut rng).expect("empty board has moves");
        if *chosen.difficulty() == Difficulty::Soft {
            soft += 1;
        }
        assert!(board.is_empty(*chosen.position()));
    }

    let fraction = soft as f64 / trials as f64;
    assert!(
        (fraction - SOFT_CHANCE).abs() < 0.08,
        "soft fraction {}",
        fraction
    );
}

#[test]
fn test_choose_move_does_not_modify_board() {
    let board: Board = "X___O___X".parse().unwrap();
    let copy = board;
    let mut rng = StdRng::seed_from_u64(1);
    let _ = choose_move(&board, &mut rng);
    assert_eq!(board, copy);
}
