//! Tests for serializing a whole session (history plus cursor).

use replay_tictactoe::{GameEngine, Position};

#[test]
fn test_session_round_trips_through_json() {
    let mut game = GameEngine::new();
    game.apply_move(Position::Center);
    game.apply_move(Position::TopLeft);
    game.apply_move(Position::BottomRight);
    game.jump_to(1);

    let json = serde_json::to_string(&game).expect("serialize session");
    let restored: GameEngine = serde_json::from_str(&json).expect("deserialize session");

    assert_eq!(restored, game);
    assert_eq!(restored.cursor(), 1);
    assert_eq!(restored.status_line(), game.status_line());
    assert_eq!(restored.board(), game.board());
}
