//! Session snapshot - everything the presentation layer needs to render

use arrayvec::ArrayVec;

use crate::types::{GridSize, Tile, VariantMode, MAX_CELLS};

/// Per-position modifier flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileFlags {
    pub locked: bool,
    pub rotatable: bool,
    /// Remaining countdown for a live bomb at this position.
    pub bomb_ticks: Option<u8>,
}

/// Immutable view of the session after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub size: GridSize,
    pub mode: VariantMode,
    pub tiles: ArrayVec<Tile, MAX_CELLS>,
    pub flags: ArrayVec<TileFlags, MAX_CELLS>,
    pub move_count: u32,
    pub elapsed_seconds: u32,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub solved: bool,
    /// Best recorded time for this grid size, read through the persistence
    /// collaborator.
    pub best_time: Option<u32>,
}

impl SessionSnapshot {
    pub fn flags_at(&self, p: usize) -> TileFlags {
        self.flags.get(p).copied().unwrap_or_default()
    }
}
