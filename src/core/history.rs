//! History module - undo/redo stacks of board snapshots
//!
//! Each entry is a full copy of the tile sequence. The undo stack is pushed
//! immediately before every accepted move; undo moves entries onto the redo
//! stack, and any new accepted move invalidates the redo stack.

use arrayvec::ArrayVec;

use crate::types::{Tile, MAX_CELLS};

/// One captured board state.
pub type Snapshot = ArrayVec<Tile, MAX_CELLS>;

#[derive(Debug, Clone, Default)]
pub struct History {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pre-move state of an accepted move. Divergence from the
    /// undone timeline discards the redo stack.
    pub fn push(&mut self, tiles: &[Tile]) {
        self.undo.push(tiles.iter().copied().collect());
        self.redo.clear();
    }

    /// Pop the most recent pre-move state, saving `current` for redo.
    /// Returns `None` (and changes nothing) when there is nothing to undo.
    pub fn undo(&mut self, current: &[Tile]) -> Option<Snapshot> {
        let restored = self.undo.pop()?;
        self.redo.push(current.iter().copied().collect());
        Some(restored)
    }

    /// Re-apply the most recently undone state, saving `current` for undo.
    pub fn redo(&mut self, current: &[Tile]) -> Option<Snapshot> {
        let restored = self.redo.pop()?;
        self.undo.push(current.iter().copied().collect());
        Some(restored)
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drop both stacks (new session).
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(values: &[u8]) -> Vec<Tile> {
        values
            .iter()
            .map(|&v| if v == 0 { None } else { Some(v) })
            .collect()
    }

    #[test]
    fn test_undo_empty_is_noop() {
        let mut history = History::new();
        assert!(history.undo(&snap(&[1, 0])).is_none());
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut history = History::new();
        let before = snap(&[1, 2, 0]);
        let after = snap(&[1, 0, 2]);

        history.push(&before);
        let undone = history.undo(&after).unwrap();
        assert_eq!(undone.as_slice(), before.as_slice());
        assert_eq!(history.redo_depth(), 1);

        let redone = history.redo(&before).unwrap();
        assert_eq!(redone.as_slice(), after.as_slice());
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_new_move_clears_redo() {
        let mut history = History::new();
        history.push(&snap(&[1, 2, 0]));
        history.undo(&snap(&[1, 0, 2])).unwrap();
        assert_eq!(history.redo_depth(), 1);

        history.push(&snap(&[0, 1, 2]));
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_clear_drops_both_stacks() {
        let mut history = History::new();
        history.push(&snap(&[1, 2, 0]));
        history.undo(&snap(&[1, 0, 2])).unwrap();
        history.clear();
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }
}
