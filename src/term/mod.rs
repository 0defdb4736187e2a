//! Terminal presentation module.
//!
//! A small game-oriented rendering layer: `GameView` maps session snapshots
//! to styled lines with no I/O, and `TerminalRenderer` flushes those lines to
//! a raw-mode alternate screen.

pub mod game_view;
pub mod renderer;

pub use game_view::{GameView, Line, Span, Theme};
pub use renderer::TerminalRenderer;
