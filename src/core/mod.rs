//! Core module - pure puzzle engine with no I/O
//!
//! Board representation, shuffle generation, move legality, history,
//! variant modifiers, win detection, and the session clocks. Everything here
//! is deterministic given a seed and drives no timers of its own; the runner
//! feeds elapsed milliseconds into `Session::tick`.

pub mod board;
pub mod history;
pub mod records;
pub mod rng;
pub mod session;
pub mod shuffle;
pub mod snapshot;
pub mod variant;

pub use board::{is_solvable, is_too_easy, Board};
pub use records::{Records, ScoreEntry};
pub use rng::SimpleRng;
pub use session::{Session, SessionEvent};
pub use snapshot::{SessionSnapshot, TileFlags};
pub use variant::{BombTimer, VariantState};
