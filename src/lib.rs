//! tui-fifteen: a terminal sliding-tile puzzle.
//!
//! Generalized 15-puzzle on 3x3 to 6x6 grids with optional gameplay variants
//! (locked tiles, rotatable tiles, timed bomb tiles), undo/redo, best-time
//! scoring, and color themes. The engine in [`core`] is pure and
//! deterministic; [`term`] renders it, [`input`] maps keys to actions, and
//! [`store`] persists best times and score history.

pub mod core;
pub mod input;
pub mod store;
pub mod term;
pub mod types;
