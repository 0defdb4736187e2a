//! GameView: maps a `SessionSnapshot` into styled terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::{Attribute, Attributes, Color, ContentStyle};

use crate::core::{ScoreEntry, SessionSnapshot};

/// Presentation-only color scheme, cycled with the `t` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Classic,
    Dark,
    Neon,
}

impl Theme {
    /// Parse theme from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Theme::Classic),
            "dark" => Some(Theme::Dark),
            "neon" => Some(Theme::Neon),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Dark => "dark",
            Theme::Neon => "neon",
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            Theme::Classic => Theme::Dark,
            Theme::Dark => Theme::Neon,
            Theme::Neon => Theme::Classic,
        }
    }

    fn tile(&self) -> Color {
        match self {
            Theme::Classic => Color::White,
            Theme::Dark => Color::Grey,
            Theme::Neon => Color::Cyan,
        }
    }

    fn placed(&self) -> Color {
        match self {
            Theme::Classic => Color::Green,
            Theme::Dark => Color::DarkGreen,
            Theme::Neon => Color::Magenta,
        }
    }

    fn locked(&self) -> Color {
        match self {
            Theme::Classic => Color::Red,
            Theme::Dark => Color::DarkRed,
            Theme::Neon => Color::Yellow,
        }
    }

    fn rotatable(&self) -> Color {
        match self {
            Theme::Classic => Color::Blue,
            Theme::Dark => Color::DarkBlue,
            Theme::Neon => Color::Green,
        }
    }

    fn bomb(&self) -> Color {
        match self {
            Theme::Classic => Color::Yellow,
            Theme::Dark => Color::DarkYellow,
            Theme::Neon => Color::Red,
        }
    }

    fn text(&self) -> Color {
        match self {
            Theme::Classic => Color::White,
            Theme::Dark => Color::Grey,
            Theme::Neon => Color::Cyan,
        }
    }
}

/// One styled run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: ContentStyle,
}

impl Span {
    fn new(text: impl Into<String>, style: ContentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One terminal row.
pub type Line = Vec<Span>;

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..Default::default()
    }
}

fn bold(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        attributes: Attributes::from(Attribute::Bold),
        ..Default::default()
    }
}

fn reversed(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        attributes: Attributes::from(Attribute::Reverse),
        ..Default::default()
    }
}

/// Width of one rendered tile cell in characters.
const CELL_WIDTH: usize = 7;

#[derive(Debug, Clone, Copy)]
pub struct GameView {
    pub theme: Theme,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            theme: Theme::Classic,
        }
    }
}

impl GameView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Render the session into terminal lines.
    ///
    /// `cursor` is the selected board position, `message` the transient
    /// status text from the latest session events.
    pub fn render(
        &self,
        snapshot: &SessionSnapshot,
        history: &[ScoreEntry],
        cursor: usize,
        message: &str,
    ) -> Vec<Line> {
        let mut lines = Vec::new();
        let dim = snapshot.size.dimension();
        let theme = self.theme;

        lines.push(vec![Span::new(
            format!(
                "tui-fifteen  {d}x{d}  mode: {}  theme: {}",
                snapshot.mode.as_str(),
                theme.as_str(),
                d = dim,
            ),
            bold(theme.text()),
        )]);
        lines.push(Vec::new());

        for row in 0..dim {
            let mut line = Vec::new();
            for col in 0..dim {
                let p = row * dim + col;
                line.push(self.tile_span(snapshot, p, p == cursor));
            }
            lines.push(line);
        }

        lines.push(Vec::new());

        let best = match snapshot.best_time {
            Some(seconds) => format!("{seconds}s"),
            None => "--".to_string(),
        };
        lines.push(vec![Span::new(
            format!(
                "Moves: {}   Time: {}s   Best: {}   undo: {}  redo: {}",
                snapshot.move_count,
                snapshot.elapsed_seconds,
                best,
                snapshot.undo_depth,
                snapshot.redo_depth,
            ),
            fg(theme.text()),
        )]);

        if snapshot.solved {
            lines.push(vec![Span::new(
                format!(
                    "Solved in {} moves and {}s!",
                    snapshot.move_count, snapshot.elapsed_seconds
                ),
                bold(theme.placed()),
            )]);
        } else if !message.is_empty() {
            lines.push(vec![Span::new(message.to_string(), fg(theme.bomb()))]);
        } else {
            lines.push(Vec::new());
        }

        if !history.is_empty() {
            lines.push(Vec::new());
            lines.push(vec![Span::new(
                format!("Recent scores ({d}x{d}):", d = dim),
                bold(theme.text()),
            )]);
            for entry in history.iter().rev() {
                lines.push(vec![Span::new(
                    format!("  {}s on {}", entry.time, entry.date),
                    fg(theme.text()),
                )]);
            }
        }

        lines.push(Vec::new());
        lines.push(vec![Span::new(
            "arrows move  space select  u undo  y redo  n shuffle  +/- size  v mode  t theme  q quit",
            fg(Color::DarkGrey),
        )]);

        lines
    }

    fn tile_span(&self, snapshot: &SessionSnapshot, p: usize, under_cursor: bool) -> Span {
        let theme = self.theme;
        let flags = snapshot.flags_at(p);
        let tile = snapshot.tiles.get(p).copied().flatten();

        // Badge, in priority order: locked beats bomb beats rotatable.
        let (badge, color) = if flags.locked {
            ("#".to_string(), theme.locked())
        } else if let Some(ticks) = flags.bomb_ticks {
            (format!("!{ticks}"), theme.bomb())
        } else if flags.rotatable {
            ("@".to_string(), theme.rotatable())
        } else {
            let placed = tile == Some((p + 1) as u8);
            (
                String::new(),
                if placed { theme.placed() } else { theme.tile() },
            )
        };

        let body = match tile {
            Some(value) => format!("{value}{badge}"),
            None => ".".to_string(),
        };
        let text = if under_cursor {
            format!("[{body:^w$}]", w = CELL_WIDTH - 2)
        } else {
            format!(" {body:^w$} ", w = CELL_WIDTH - 2)
        };

        let style = if under_cursor {
            reversed(color)
        } else {
            fg(color)
        };
        Span::new(text, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;
    use crate::store::MemoryStore;
    use crate::types::{GridSize, VariantMode};

    fn snapshot_for(mode: VariantMode) -> crate::core::SessionSnapshot {
        Session::new(GridSize::Four, mode, 5, Box::new(MemoryStore::new())).snapshot()
    }

    #[test]
    fn test_render_has_grid_rows() {
        let view = GameView::default();
        let snapshot = snapshot_for(VariantMode::None);
        let lines = view.render(&snapshot, &[], 0, "");
        // Rows 2..2+dim are the grid.
        for row in 0..4 {
            assert_eq!(lines[2 + row].len(), 4);
        }
    }

    #[test]
    fn test_badges_present_in_mode_all() {
        let view = GameView::default();
        let snapshot = snapshot_for(VariantMode::All);
        let lines = view.render(&snapshot, &[], 0, "");
        let grid_text: String = lines[2..6]
            .iter()
            .flat_map(|line| line.iter().map(|span| span.text.as_str()))
            .collect();
        assert!(grid_text.contains('#'), "locked badge missing");
        assert!(grid_text.contains('@'), "rotatable badge missing");
        assert!(grid_text.contains("!15"), "bomb countdown missing");
    }

    #[test]
    fn test_theme_cycle_is_closed() {
        let mut theme = Theme::Classic;
        for _ in 0..3 {
            theme = theme.cycle();
        }
        assert_eq!(theme, Theme::Classic);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::from_str("NEON"), Some(Theme::Neon));
        assert_eq!(Theme::from_str("plasma"), None);
    }
}
