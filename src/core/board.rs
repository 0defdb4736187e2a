//! Board module - the tile permutation for one grid
//!
//! The board is a flat row-major sequence of `size * size` cells holding the
//! values `1..=n-1` exactly once plus one empty slot. Position `p` maps to
//! row `p / size`, column `p % size`. Uses a fixed-capacity array since the
//! largest grid is 6x6.

use arrayvec::ArrayVec;

use crate::types::{GridSize, Tile, MAX_CELLS, NEARLY_SOLVED_MARGIN};

/// The puzzle board for a single session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: GridSize,
    cells: ArrayVec<Tile, MAX_CELLS>,
}

impl Board {
    /// Create the solved board: `[1, 2, .., n-1, empty]`.
    pub fn solved(size: GridSize) -> Self {
        let n = size.cell_count();
        let mut cells = ArrayVec::new();
        for value in 1..n {
            cells.push(Some(value as u8));
        }
        cells.push(None);
        Self { size, cells }
    }

    /// Rebuild a board from raw tiles. Panics in debug builds if the tile
    /// sequence violates the board invariant.
    pub fn from_tiles(size: GridSize, tiles: &[Tile]) -> Self {
        let board = Self {
            size,
            cells: tiles.iter().copied().collect(),
        };
        board.debug_check_invariant();
        board
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// All cells in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.cells
    }

    /// Cell at position `p`, or `None` if out of range.
    pub fn get(&self, p: usize) -> Option<Tile> {
        self.cells.get(p).copied()
    }

    /// Position of the empty slot.
    pub fn empty_pos(&self) -> usize {
        self.debug_check_invariant();
        self.cells
            .iter()
            .position(|cell| cell.is_none())
            .unwrap_or_else(|| unreachable!("board invariant: exactly one empty slot"))
    }

    /// Whether `p` is orthogonally adjacent (Manhattan distance 1) to the
    /// empty slot. Diagonals never qualify.
    pub fn is_adjacent_to_empty(&self, p: usize) -> bool {
        if p >= self.cells.len() {
            return false;
        }
        let dim = self.size.dimension();
        let empty = self.empty_pos();
        let (row_p, col_p) = (p / dim, p % dim);
        let (row_e, col_e) = (empty / dim, empty % dim);
        row_p.abs_diff(row_e) + col_p.abs_diff(col_e) == 1
    }

    /// Swap the tile at `p` with the empty slot.
    ///
    /// Callers must have validated adjacency; this only moves data.
    pub fn slide(&mut self, p: usize) {
        debug_assert!(self.is_adjacent_to_empty(p));
        let empty = self.empty_pos();
        self.cells.swap(p, empty);
    }

    /// True iff every position `0..n-1` holds its solved value, which forces
    /// the empty slot into the last position.
    pub fn is_solved(&self) -> bool {
        let n = self.cells.len();
        (0..n - 1).all(|i| self.cells[i] == Some((i + 1) as u8))
    }

    /// Count of non-empty positions already holding their solved value.
    pub fn solved_positions(&self) -> usize {
        let n = self.cells.len();
        (0..n - 1)
            .filter(|&i| self.cells[i] == Some((i + 1) as u8))
            .count()
    }

    /// Replace the tile sequence wholesale (undo/redo restore path).
    pub fn restore(&mut self, tiles: &[Tile]) {
        debug_assert_eq!(tiles.len(), self.cells.len());
        self.cells.clear();
        self.cells.extend(tiles.iter().copied());
        self.debug_check_invariant();
    }

    fn debug_check_invariant(&self) {
        #[cfg(debug_assertions)]
        {
            let n = self.size.cell_count();
            assert_eq!(self.cells.len(), n, "board must hold size^2 cells");
            let empties = self.cells.iter().filter(|c| c.is_none()).count();
            assert_eq!(empties, 1, "board must hold exactly one empty slot");
            let mut seen = [false; MAX_CELLS];
            for cell in self.cells.iter().flatten() {
                let v = *cell as usize;
                assert!(v >= 1 && v < n, "tile value out of range");
                assert!(!seen[v], "tile value duplicated");
                seen[v] = true;
            }
        }
    }
}

/// Even inversion parity over the non-empty values in row-major order is the
/// reachability condition used by the original game for every grid size.
pub fn is_solvable(board: &Board) -> bool {
    let values: ArrayVec<u8, MAX_CELLS> = board.tiles().iter().flatten().copied().collect();
    let mut inversions = 0usize;
    for i in 0..values.len() {
        for j in i + 1..values.len() {
            if values[i] > values[j] {
                inversions += 1;
            }
        }
    }
    inversions % 2 == 0
}

/// A shuffle with `n - 4` or more tiles already in place is rejected as not
/// worth playing.
pub fn is_too_easy(board: &Board) -> bool {
    board.solved_positions() >= board.size().cell_count() - NEARLY_SOLVED_MARGIN
}
