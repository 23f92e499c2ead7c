use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::order::TileOrder;
use crate::tile::{Tile, TileId};

/// Immutable full-state capture used by undo/redo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: u32,
    pub columns: u32,
    pub tiles: BTreeMap<TileId, Tile>,
    pub order: TileOrder,
}

/// Linear undo/redo history of full-board snapshots.
///
/// `record` is called with the pre-mutation state before every mutating
/// action, so the stacks only ever hold past states; the live state is
/// never on either stack. Any recorded action discards pending redos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    undo: Vec<BoardSnapshot>,
    redo: Vec<BoardSnapshot>,
}

impl History {
    /// Push the pre-mutation state and invalidate the redo branch.
    pub fn record(&mut self, before: BoardSnapshot) {
        self.undo.push(before);
        self.redo.clear();
    }

    /// Swap the live state for the most recent undo snapshot. Returns the
    /// snapshot to restore, or `None` when there is nothing to undo.
    pub fn undo(&mut self, current: BoardSnapshot) -> Option<BoardSnapshot> {
        let restored = self.undo.pop()?;
        self.redo.push(current);
        Some(restored)
    }

    /// Symmetric counterpart of [`History::undo`].
    pub fn redo(&mut self, current: BoardSnapshot) -> Option<BoardSnapshot> {
        let restored = self.redo.pop()?;
        self.undo.push(current);
        Some(restored)
    }

    /// Unsaved-changes flag: any recorded, not-yet-unwound mutation.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drop both stacks, e.g. after loading or cloning a board.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(rows: u32) -> BoardSnapshot {
        BoardSnapshot {
            rows,
            columns: 5,
            tiles: BTreeMap::new(),
            order: TileOrder::identity(rows * 5),
        }
    }

    #[test]
    fn undo_returns_snapshots_in_reverse_order() {
        let mut history = History::default();
        history.record(snap(1));
        history.record(snap(2));
        assert_eq!(history.undo(snap(3)).unwrap().rows, 2);
        assert_eq!(history.undo(snap(2)).unwrap().rows, 1);
        assert!(history.undo(snap(1)).is_none());
    }

    #[test]
    fn redo_restores_what_undo_took() {
        let mut history = History::default();
        history.record(snap(1));
        let restored = history.undo(snap(2)).unwrap();
        assert_eq!(restored.rows, 1);
        let redone = history.redo(restored).unwrap();
        assert_eq!(redone.rows, 2);
        assert!(history.redo(redone).is_none());
    }

    #[test]
    fn new_record_after_undo_clears_redo() {
        let mut history = History::default();
        history.record(snap(1));
        let restored = history.undo(snap(2)).unwrap();
        assert_eq!(history.redo_depth(), 1);
        history.record(restored);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn unsaved_flag_tracks_undo_stack() {
        let mut history = History::default();
        assert!(!history.has_unsaved_changes());
        history.record(snap(1));
        assert!(history.has_unsaved_changes());
        let _ = history.undo(snap(2));
        assert!(!history.has_unsaved_changes());
    }
}
