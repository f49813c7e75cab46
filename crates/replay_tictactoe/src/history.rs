//! Move history: immutable board snapshots with branch-on-rewrite.

use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// One history entry: the board after a move and what was placed.
///
/// The first entry of every history is synthetic: an empty board with no
/// placement. Each record owns its snapshot, so appending later moves never
/// alters earlier entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    placed: Option<(Player, Position)>,
}

impl MoveRecord {
    /// The entry for the empty board before any move.
    pub(crate) fn initial() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    pub(crate) fn new(board: Board, player: Player, position: Position) -> Self {
        Self {
            board,
            placed: Some((player, position)),
        }
    }

    /// The board snapshot recorded by this entry.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark and cell this entry recorded, `None` for the initial entry.
    pub fn placed(&self) -> Option<(Player, Position)> {
        self.placed
    }
}

/// Ordered move records; never empty, index 0 is the initial empty board.
///
/// Appending from a past point first truncates everything after that point:
/// only one branch of play is ever live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    pub(crate) fn new() -> Self {
        Self {
            records: vec![MoveRecord::initial()],
        }
    }

    /// Drops every record after `index`.
    pub(crate) fn truncate_to(&mut self, index: usize) {
        self.records.truncate(index + 1);
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Index of the newest entry.
    pub fn last_index(&self) -> usize {
        self.records.len() - 1
    }

    /// All entries, oldest first.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// The entry at `index`, if recorded.
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.records.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_new_history_holds_initial_entry() {
        let history = History::new();
        assert_eq!(history.records().len(), 1);
        assert_eq!(history.last_index(), 0);
        let initial = history.get(0).unwrap();
        assert_eq!(initial.placed(), None);
        assert_eq!(initial.board(), &Board::new());
    }

    #[test]
    fn test_truncate_then_push_discards_future() {
        let mut history = History::new();
        for (index, position) in [Position::TopLeft, Position::Center, Position::TopRight]
            .into_iter()
            .enumerate()
        {
            let player = if index % 2 == 0 { Player::X } else { Player::O };
            let mut board = history.get(history.last_index()).unwrap().board().clone();
            board.set(position, Square::Occupied(player));
            history.push(MoveRecord::new(board, player, position));
        }
        assert_eq!(history.records().len(), 4);

        history.truncate_to(1);
        let mut board = history.get(1).unwrap().board().clone();
        board.set(Position::BottomRight, Square::Occupied(Player::O));
        history.push(MoveRecord::new(board, Player::O, Position::BottomRight));

        assert_eq!(history.records().len(), 3);
        assert_eq!(
            history.get(2).unwrap().placed(),
            Some((Player::O, Position::BottomRight))
        );
    }

    #[test]
    fn test_earlier_records_unchanged_by_append() {
        let mut history = History::new();
        let snapshot = history.get(0).unwrap().clone();

        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        history.push(MoveRecord::new(board, Player::X, Position::Center));

        assert_eq!(history.get(0).unwrap(), &snapshot);
    }
}
