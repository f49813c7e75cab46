//! Game engine: move application, time travel, derived status.

use crate::history::{History, MoveRecord};
use crate::moves::{self, ListOrder, MoveEntry};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe engine owning the move history and the replay cursor.
///
/// The cursor selects which recorded snapshot is "now": it determines the
/// displayed board, whose turn it is, and what [`GameEngine::status`]
/// evaluates. Win and tie state is re-derived on every read rather than
/// stored, so moving the cursor backward out of a finished game simply
/// resumes play from that point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    history: History,
    cursor: usize,
}

impl GameEngine {
    /// Creates an engine holding a single empty-board entry.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            cursor: 0,
        }
    }

    /// The board snapshot under the cursor.
    pub fn board(&self) -> &Board {
        self.history.records()[self.cursor].board()
    }

    /// Index of the history entry currently displayed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Read access to the recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The mark that moves next from the cursor position.
    ///
    /// The cursor counts completed moves: even means X, odd means O.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Places the next mark at `position`.
    ///
    /// Ignored when the square is occupied or the game under the cursor is
    /// already decided. Moving from a rewound cursor discards the recorded
    /// future before the new record is appended.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn apply_move(&mut self, position: Position) {
        let board = self.board();
        if !board.is_empty(position) || rules::evaluate(board) != GameStatus::InProgress {
            debug!(?position, "move ignored: square occupied or game decided");
            return;
        }

        let player = self.to_move();
        let mut next = board.clone();
        next.set(position, Square::Occupied(player));

        self.history.truncate_to(self.cursor);
        self.history.push(MoveRecord::new(next, player, position));
        self.cursor = self.history.last_index();
        debug!(%player, ?position, cursor = self.cursor, "move recorded");
    }

    /// Moves the cursor to an existing history entry.
    ///
    /// `index` must refer to a recorded entry, as produced by
    /// [`GameEngine::list_moves`]; anything out of range is a caller bug.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        assert!(
            index < self.history.records().len(),
            "history index {index} out of range"
        );
        self.cursor = index;
    }

    /// Win/tie/in-progress, derived from the board under the cursor.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(self.board())
    }

    /// Status text for display.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::InProgress => format!("Next player: {}", self.to_move()),
            GameStatus::Won { winner, .. } => format!("Winner: {winner}"),
            GameStatus::Draw => "Tie!".to_string(),
        }
    }

    /// The three cells to highlight when the game under the cursor is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.status() {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Descriptors for every history entry, in the requested order.
    ///
    /// The iterator is lazy and borrows the engine; call again to regenerate
    /// the same sequence.
    pub fn list_moves(&self, order: ListOrder) -> impl Iterator<Item = MoveEntry> + '_ {
        moves::list(self, order)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
