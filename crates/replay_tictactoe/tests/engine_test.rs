//! Tests for the game engine: moves, guards, and time travel.

use replay_tictactoe::{GameEngine, GameStatus, ListOrder, Player, Position};

#[test]
fn test_x_wins_top_row() {
    let mut game = GameEngine::new();
    for position in [
        Position::TopLeft,    // X
        Position::Center,     // O
        Position::TopCenter,  // X
        Position::MiddleRight, // O
        Position::TopRight,   // X completes the top row
    ] {
        game.apply_move(position);
    }

    assert_eq!(
        game.status(),
        GameStatus::Won {
            winner: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
    assert_eq!(game.status_line(), "Winner: X");
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_tie_when_board_fills_without_line() {
    let mut game = GameEngine::new();
    for position in [
        Position::TopLeft,      // X
        Position::TopCenter,    // O
        Position::TopRight,     // X
        Position::Center,       // O
        Position::MiddleLeft,   // X
        Position::MiddleRight,  // O
        Position::BottomCenter, // X
        Position::BottomLeft,   // O
        Position::BottomRight,  // X fills the board
    ] {
        game.apply_move(position);
    }

    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status_line(), "Tie!");
    assert_eq!(game.winning_line(), None);
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut game = GameEngine::new();
    game.apply_move(Position::Center);

    let before = game.clone();
    game.apply_move(Position::Center);
    assert_eq!(game, before);
}

#[test]
fn test_moves_after_decision_are_ignored() {
    let mut game = GameEngine::new();
    for position in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::MiddleRight,
        Position::TopRight,
    ] {
        game.apply_move(position);
    }
    assert!(matches!(game.status(), GameStatus::Won { .. }));

    let before = game.clone();
    game.apply_move(Position::BottomLeft);
    assert_eq!(game, before);
}

#[test]
fn test_rewound_move_truncates_future() {
    let mut game = GameEngine::new();
    for position in [
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
    ] {
        game.apply_move(position);
    }
    assert_eq!(game.history().records().len(), 5);

    game.jump_to(2);
    game.apply_move(Position::BottomRight);

    assert_eq!(game.history().records().len(), 4);
    assert_eq!(game.cursor(), 3);
    assert_eq!(
        game.history().get(3).unwrap().placed(),
        Some((Player::X, Position::BottomRight))
    );
}

#[test]
fn test_time_travel_reverts_terminal_state() {
    let mut game = GameEngine::new();
    for position in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::MiddleRight,
        Position::TopRight,
    ] {
        game.apply_move(position);
    }
    assert!(matches!(game.status(), GameStatus::Won { .. }));

    game.jump_to(0);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.to_move(), Player::X);

    // Play resumes from the start; the winning future is discarded.
    game.apply_move(Position::BottomRight);
    assert_eq!(game.history().records().len(), 2);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_derived_reads_are_idempotent() {
    let mut game = GameEngine::new();
    game.apply_move(Position::Center);
    game.apply_move(Position::TopLeft);

    assert_eq!(game.status(), game.status());
    assert_eq!(game.status_line(), game.status_line());

    let first: Vec<_> = game.list_moves(ListOrder::Ascending).collect();
    let second: Vec<_> = game.list_moves(ListOrder::Ascending).collect();
    assert_eq!(first, second);
}
