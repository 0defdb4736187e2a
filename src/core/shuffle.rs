//! Shuffle generator - rejection-sampled solvable starting boards
//!
//! Fisher-Yates over all `n` positions, retried until the permutation is
//! solvable and not nearly solved. Roughly half of all permutations pass the
//! parity test and almost none are nearly solved, so the loop terminates in
//! an expected handful of iterations.

use arrayvec::ArrayVec;

use crate::core::board::{is_solvable, is_too_easy, Board};
use crate::core::rng::SimpleRng;
use crate::types::{GridSize, Tile, MAX_CELLS};

/// Produce a random, solvable, non-trivial starting board.
pub fn generate(size: GridSize, rng: &mut SimpleRng) -> Board {
    loop {
        let mut tiles: ArrayVec<Tile, MAX_CELLS> =
            Board::solved(size).tiles().iter().copied().collect();
        rng.shuffle(&mut tiles);
        let board = Board::from_tiles(size, &tiles);
        if is_solvable(&board) && !is_too_easy(&board) {
            return board;
        }
    }
}
