//! Tie detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::Board;
use strum::IntoEnumIterator;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a tie.
pub fn is_full(board: &Board) -> bool {
    Position::iter().all(|position| !board.is_empty(position))
}
