//! Move-list descriptors for presenting the recorded history.

use crate::engine::GameEngine;

/// Presentation order for the move list.
///
/// Ordering affects only how entries are listed, never which history index
/// an entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Game start first.
    Ascending,
    /// Newest entry first.
    Descending,
}

impl ListOrder {
    /// The opposite order.
    pub fn toggled(self) -> Self {
        match self {
            ListOrder::Ascending => ListOrder::Descending,
            ListOrder::Descending => ListOrder::Ascending,
        }
    }
}

/// One line of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index this entry refers to; feed back into
    /// [`GameEngine::jump_to`].
    pub index: usize,
    /// Whether the engine cursor currently sits on this entry.
    pub is_current: bool,
    /// Display label, e.g. `Go to move #3: (X, [1,3])`.
    pub label: String,
}

pub(crate) fn list(
    engine: &GameEngine,
    order: ListOrder,
) -> impl Iterator<Item = MoveEntry> + '_ {
    let len = engine.history().records().len();
    let indices: Box<dyn Iterator<Item = usize>> = match order {
        ListOrder::Ascending => Box::new(0..len),
        ListOrder::Descending => Box::new((0..len).rev()),
    };
    indices.map(move |index| entry(engine, index))
}

fn entry(engine: &GameEngine, index: usize) -> MoveEntry {
    let is_current = index == engine.cursor();
    let label = match engine.history().records()[index].placed() {
        None if is_current => "You are at game start".to_string(),
        None => "Go to game start".to_string(),
        Some((player, position)) => {
            let verb = if is_current { "You are at" } else { "Go to" };
            format!(
                "{verb} move #{index}: ({player}, [{},{}])",
                position.row(),
                position.col()
            )
        }
    };
    MoveEntry {
        index,
        is_current,
        label,
    }
}
