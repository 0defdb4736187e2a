//! Session module - one complete play-through of the puzzle
//!
//! Ties together board, shuffle generator, move engine, history, variant
//! modifiers, win detection, and the two 1 Hz session clocks. The session
//! exclusively owns all mutable state; regenerating replaces it wholesale.
//!
//! Both clocks are driven from a single `tick(elapsed_ms)` entry point with
//! independent millisecond accumulators, so user actions and clock callbacks
//! are serialized by construction and a regenerate cannot leave an orphaned
//! timer mutating a superseded session.

use crate::core::records::Records;
use crate::core::rng::SimpleRng;
use crate::core::shuffle;
use crate::core::snapshot::{SessionSnapshot, TileFlags};
use crate::core::variant::VariantState;
use crate::core::Board;
use crate::store::Store;
use crate::types::{GridSize, MoveOutcome, VariantMode, SECOND_MS};

use super::history::History;

/// Discrete notification for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    MoveAccepted,
    MoveRejected,
    /// A rotatable tile spun in place (cosmetic).
    TileRotated(usize),
    /// A bomb countdown expired and its position is now locked.
    BombLocked(usize),
    Solved {
        move_count: u32,
        elapsed_seconds: u32,
        new_best: bool,
    },
}

pub struct Session {
    board: Board,
    mode: VariantMode,
    variant: VariantState,
    history: History,
    move_count: u32,
    elapsed_seconds: u32,
    solved: bool,
    clock_accum_ms: u32,
    bomb_accum_ms: u32,
    rng: SimpleRng,
    records: Records,
    events: Vec<SessionEvent>,
}

impl Session {
    /// Create a session with a freshly generated board.
    pub fn new(size: GridSize, mode: VariantMode, seed: u32, store: Box<dyn Store>) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = shuffle::generate(size, &mut rng);
        let variant = VariantState::assign(mode, size.cell_count(), board.empty_pos(), &mut rng);
        Self {
            board,
            mode,
            variant,
            history: History::new(),
            move_count: 0,
            elapsed_seconds: 0,
            solved: false,
            clock_accum_ms: 0,
            bomb_accum_ms: 0,
            rng,
            records: Records::new(store),
            events: Vec::new(),
        }
    }

    /// Discard the current play-through and start a new one.
    ///
    /// Resets move count, elapsed time, history, variant state, and both
    /// clock accumulators (the single-threaded equivalent of cancelling the
    /// previous session's tickers).
    pub fn regenerate(&mut self, size: GridSize, mode: VariantMode) {
        self.board = shuffle::generate(size, &mut self.rng);
        self.mode = mode;
        self.variant = VariantState::assign(
            mode,
            size.cell_count(),
            self.board.empty_pos(),
            &mut self.rng,
        );
        self.history.clear();
        self.move_count = 0;
        self.elapsed_seconds = 0;
        self.solved = false;
        self.clock_accum_ms = 0;
        self.bomb_accum_ms = 0;
        self.events.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> GridSize {
        self.board.size()
    }

    pub fn mode(&self) -> VariantMode {
        self.mode
    }

    pub fn variant(&self) -> &VariantState {
        &self.variant
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    /// Try to act on position `p`.
    ///
    /// Locked positions are rejected outright, even when adjacent. A
    /// rotatable position holding a tile spins in place without touching the
    /// board, history, or move count. Anything else slides iff orthogonally
    /// adjacent to the empty slot.
    pub fn attempt_move(&mut self, p: usize) -> MoveOutcome {
        if self.variant.is_locked(p) {
            self.events.push(SessionEvent::MoveRejected);
            return MoveOutcome::Rejected;
        }

        if self.variant.is_rotatable(p) {
            let holds_tile = matches!(self.board.get(p), Some(Some(_)));
            if holds_tile {
                self.events.push(SessionEvent::TileRotated(p));
                return MoveOutcome::Rotated;
            }
            self.events.push(SessionEvent::MoveRejected);
            return MoveOutcome::Rejected;
        }

        if !self.board.is_adjacent_to_empty(p) {
            self.events.push(SessionEvent::MoveRejected);
            return MoveOutcome::Rejected;
        }

        self.history.push(self.board.tiles());
        self.board.slide(p);
        self.move_count += 1;
        self.events.push(SessionEvent::MoveAccepted);

        self.check_win();
        MoveOutcome::Slid
    }

    /// Restore the pre-move board from the undo stack. Move count floors at
    /// zero. Variant state is deliberately untouched: a bomb that locked
    /// before the undo stays locked.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.board.tiles()) {
            Some(snapshot) => {
                self.board.restore(&snapshot);
                self.move_count = self.move_count.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone move.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.board.tiles()) {
            Some(snapshot) => {
                self.board.restore(&snapshot);
                self.move_count += 1;
                true
            }
            None => false,
        }
    }

    /// Advance both session clocks by `elapsed_ms`. Returns true when any
    /// observable state changed. Solving stops both clocks for good; only
    /// `regenerate` restarts them.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.solved {
            return false;
        }

        let mut changed = false;

        self.clock_accum_ms += elapsed_ms;
        while self.clock_accum_ms >= SECOND_MS {
            self.clock_accum_ms -= SECOND_MS;
            self.elapsed_seconds += 1;
            changed = true;
        }

        if self.mode.includes_bomb() {
            self.bomb_accum_ms += elapsed_ms;
            while self.bomb_accum_ms >= SECOND_MS {
                self.bomb_accum_ms -= SECOND_MS;
                for pos in self.variant.tick_bombs() {
                    self.events.push(SessionEvent::BombLocked(pos));
                    changed = true;
                }
            }
        }

        changed
    }

    /// Drain the notifications accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Produce the render view of the current state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let flags = (0..self.board.tiles().len())
            .map(|p| TileFlags {
                locked: self.variant.is_locked(p),
                rotatable: self.variant.is_rotatable(p),
                bomb_ticks: self.variant.bomb_ticks(p),
            })
            .collect();
        SessionSnapshot {
            size: self.size(),
            mode: self.mode,
            tiles: self.board.tiles().iter().copied().collect(),
            flags,
            move_count: self.move_count,
            elapsed_seconds: self.elapsed_seconds,
            undo_depth: self.history.undo_depth(),
            redo_depth: self.history.redo_depth(),
            solved: self.solved,
            best_time: self.records.best_time(self.size()),
        }
    }

    fn check_win(&mut self) {
        if self.solved || !self.board.is_solved() {
            return;
        }
        self.solved = true;
        let new_best = self.records.record_solve(self.size(), self.elapsed_seconds);
        self.events.push(SessionEvent::Solved {
            move_count: self.move_count,
            elapsed_seconds: self.elapsed_seconds,
            new_best,
        });
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("size", &self.size())
            .field("mode", &self.mode)
            .field("move_count", &self.move_count)
            .field("elapsed_seconds", &self.elapsed_seconds)
            .field("solved", &self.solved)
            .finish_non_exhaustive()
    }
}
