//! Variant modifier system - locked, rotatable, and bomb tiles
//!
//! A session's variant state is assigned once at shuffle time: pairwise
//! disjoint position sets drawn from `0..n-1`, never the empty slot. Bomb
//! positions carry a countdown; at zero the position becomes locked for the
//! rest of the session and cannot be unlocked (undo does not version this
//! state).

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{
    VariantMode, BOMB_START_TICKS, BOMB_TILE_COUNT, LOCKED_TILE_COUNT, ROTATABLE_TILE_COUNT,
};

/// Bombs that expire join the locked set, so it needs room for both.
const LOCKED_CAP: usize = LOCKED_TILE_COUNT + BOMB_TILE_COUNT;

/// A bomb position and its remaining 1 Hz ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BombTimer {
    pub pos: usize,
    pub remaining: u8,
}

#[derive(Debug, Clone, Default)]
pub struct VariantState {
    locked: ArrayVec<usize, LOCKED_CAP>,
    rotatable: ArrayVec<usize, ROTATABLE_TILE_COUNT>,
    bombs: ArrayVec<BombTimer, BOMB_TILE_COUNT>,
}

impl VariantState {
    /// No modifiers (mode `none`, or a fresh session before assignment).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assign modifier positions for a new session.
    ///
    /// `empty_pos` is the shuffled board's empty slot, which is never
    /// eligible; neither is the last board position, matching the original
    /// selection range.
    pub fn assign(
        mode: VariantMode,
        cell_count: usize,
        empty_pos: usize,
        rng: &mut SimpleRng,
    ) -> Self {
        let mut state = Self::empty();
        let candidates = (cell_count - 1) as u32;

        if mode.includes_locked() {
            while state.locked.len() < LOCKED_TILE_COUNT {
                let p = rng.next_range(candidates) as usize;
                if p != empty_pos && !state.locked.contains(&p) {
                    state.locked.push(p);
                }
            }
        }
        if mode.includes_rotate() {
            while state.rotatable.len() < ROTATABLE_TILE_COUNT {
                let p = rng.next_range(candidates) as usize;
                if p != empty_pos && !state.is_assigned(p) {
                    state.rotatable.push(p);
                }
            }
        }
        if mode.includes_bomb() {
            while state.bombs.len() < BOMB_TILE_COUNT {
                let p = rng.next_range(candidates) as usize;
                if p != empty_pos && !state.is_assigned(p) {
                    state.bombs.push(BombTimer {
                        pos: p,
                        remaining: BOMB_START_TICKS,
                    });
                }
            }
        }

        state
    }

    fn is_assigned(&self, p: usize) -> bool {
        self.is_locked(p) || self.is_rotatable(p) || self.bomb_ticks(p).is_some()
    }

    pub fn is_locked(&self, p: usize) -> bool {
        self.locked.contains(&p)
    }

    pub fn is_rotatable(&self, p: usize) -> bool {
        self.rotatable.contains(&p)
    }

    /// Remaining countdown for a live bomb at `p`.
    pub fn bomb_ticks(&self, p: usize) -> Option<u8> {
        self.bombs
            .iter()
            .find(|bomb| bomb.pos == p)
            .map(|bomb| bomb.remaining)
    }

    pub fn locked_positions(&self) -> &[usize] {
        &self.locked
    }

    pub fn rotatable_positions(&self) -> &[usize] {
        &self.rotatable
    }

    pub fn bombs(&self) -> &[BombTimer] {
        &self.bombs
    }

    /// Advance every bomb countdown by one tick. Bombs reaching zero move
    /// into the locked set; their positions are returned for notification.
    pub fn tick_bombs(&mut self) -> ArrayVec<usize, BOMB_TILE_COUNT> {
        let mut expired = ArrayVec::new();
        let mut i = 0;
        while i < self.bombs.len() {
            let bomb = &mut self.bombs[i];
            if bomb.remaining > 0 {
                bomb.remaining -= 1;
            }
            if bomb.remaining == 0 {
                let pos = bomb.pos;
                self.bombs.remove(i);
                if !self.locked.contains(&pos) {
                    self.locked.push(pos);
                }
                expired.push(pos);
            } else {
                i += 1;
            }
        }
        expired
    }
}
