//! Application state and key handling.

use crossterm::event::KeyCode;
use replay_tictactoe::{GameEngine, ListOrder, Position};
use tracing::debug;

use crate::input;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep running.
    Continue,
    /// Leave the application.
    Quit,
}

/// Main application state.
///
/// Everything shown on screen is a derived output of the engine; the app
/// only adds the board cursor, the move-list selection, and the list order.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    order: ListOrder,
    selection: usize,
}

impl App {
    /// Creates a fresh game.
    pub fn new(order: ListOrder) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            order,
            selection: 0,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The highlighted board cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current move-list order.
    pub fn order(&self) -> ListOrder {
        self.order
    }

    /// History index highlighted in the move list.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Signal {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Signal::Quit,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                let index = c as usize - '1' as usize;
                if let Some(position) = Position::from_index(index) {
                    self.place(position);
                }
            }
            KeyCode::Char('t') => {
                self.order = self.order.toggled();
                debug!(order = ?self.order, "toggled move list order");
            }
            KeyCode::Char('j') => {
                let last = self.engine.history().last_index();
                if self.selection < last {
                    self.selection += 1;
                }
            }
            KeyCode::Char('k') => {
                self.selection = self.selection.saturating_sub(1);
            }
            KeyCode::Char('g') => {
                debug!(index = self.selection, "jumping to selected entry");
                self.engine.jump_to(self.selection);
            }
            _ => {}
        }
        Signal::Continue
    }

    fn place(&mut self, position: Position) {
        let before = self.engine.cursor();
        self.engine.apply_move(position);
        // A recorded move may have truncated entries the selection pointed
        // at; follow the new cursor. An ignored move changes nothing.
        if self.engine.cursor() != before {
            self.selection = self.engine.cursor();
        }
    }
}
