//! Pure tic-tac-toe game logic with a rewindable move history.
//!
//! # Architecture
//!
//! - **Rules**: pure win/tie evaluation over board snapshots
//! - **History**: immutable board snapshots with branch-on-rewrite truncation
//! - **Engine**: move application, time travel, derived status
//!
//! Win and tie state is never stored; every read re-derives it from the
//! board under the replay cursor, so jumping through history can never
//! observe a stale result.
//!
//! # Example
//!
//! ```
//! use replay_tictactoe::{GameEngine, ListOrder, Position};
//!
//! let mut game = GameEngine::new();
//! game.apply_move(Position::TopLeft);
//! game.apply_move(Position::Center);
//! assert_eq!(game.status_line(), "Next player: X");
//!
//! // Rewind to the start and branch: the recorded future is discarded.
//! game.jump_to(0);
//! game.apply_move(Position::BottomRight);
//! assert_eq!(game.history().records().len(), 2);
//!
//! for entry in game.list_moves(ListOrder::Ascending) {
//!     println!("{}", entry.label);
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod history;
mod moves;
mod position;
mod rules;
mod types;

pub use engine::GameEngine;
pub use history::{History, MoveRecord};
pub use moves::{ListOrder, MoveEntry};
pub use position::Position;
pub use rules::evaluate;
pub use types::{Board, GameStatus, Player, Square};
