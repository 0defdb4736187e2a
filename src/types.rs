//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Largest supported board (6x6).
pub const MAX_CELLS: usize = 36;

/// Tile counts reserved by variant modes (original game values).
pub const LOCKED_TILE_COUNT: usize = 2;
pub const ROTATABLE_TILE_COUNT: usize = 2;
pub const BOMB_TILE_COUNT: usize = 1;

/// Bomb countdown duration in 1 Hz ticks.
pub const BOMB_START_TICKS: u8 = 15;

/// A shuffle is "nearly solved" when at least `n - NEARLY_SOLVED_MARGIN`
/// positions already hold their solved value.
pub const NEARLY_SOLVED_MARGIN: usize = 4;

/// Rolling score history keeps this many entries per grid size.
pub const SCORE_HISTORY_CAP: usize = 5;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 50;
pub const SECOND_MS: u32 = 1000;

/// A board cell: `Some(value)` for a tile, `None` for the empty slot.
pub type Tile = Option<u8>;

/// Supported square grid sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSize {
    Three,
    Four,
    Five,
    Six,
}

impl GridSize {
    /// Parse from a side length. Anything outside 3..=6 is rejected.
    pub fn from_dimension(dim: u8) -> Option<Self> {
        match dim {
            3 => Some(GridSize::Three),
            4 => Some(GridSize::Four),
            5 => Some(GridSize::Five),
            6 => Some(GridSize::Six),
            _ => None,
        }
    }

    /// Side length of the grid.
    pub fn dimension(&self) -> usize {
        match self {
            GridSize::Three => 3,
            GridSize::Four => 4,
            GridSize::Five => 5,
            GridSize::Six => 6,
        }
    }

    /// Total cell count (`size²`), including the empty slot.
    pub fn cell_count(&self) -> usize {
        self.dimension() * self.dimension()
    }

    /// Next larger size, if any.
    pub fn grow(&self) -> Option<Self> {
        match self {
            GridSize::Three => Some(GridSize::Four),
            GridSize::Four => Some(GridSize::Five),
            GridSize::Five => Some(GridSize::Six),
            GridSize::Six => None,
        }
    }

    /// Next smaller size, if any.
    pub fn shrink(&self) -> Option<Self> {
        match self {
            GridSize::Three => None,
            GridSize::Four => Some(GridSize::Three),
            GridSize::Five => Some(GridSize::Four),
            GridSize::Six => Some(GridSize::Five),
        }
    }
}

/// Variant rule set chosen at shuffle time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantMode {
    None,
    Locked,
    Rotate,
    Bomb,
    All,
}

impl VariantMode {
    /// Parse mode from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(VariantMode::None),
            "locked" => Some(VariantMode::Locked),
            "rotate" => Some(VariantMode::Rotate),
            "bomb" => Some(VariantMode::Bomb),
            "all" => Some(VariantMode::All),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantMode::None => "none",
            VariantMode::Locked => "locked",
            VariantMode::Rotate => "rotate",
            VariantMode::Bomb => "bomb",
            VariantMode::All => "all",
        }
    }

    pub fn includes_locked(&self) -> bool {
        matches!(self, VariantMode::Locked | VariantMode::All)
    }

    pub fn includes_rotate(&self) -> bool {
        matches!(self, VariantMode::Rotate | VariantMode::All)
    }

    pub fn includes_bomb(&self) -> bool {
        matches!(self, VariantMode::Bomb | VariantMode::All)
    }

    /// Cycle through modes in a fixed order (for the `v` key).
    pub fn cycle(&self) -> Self {
        match self {
            VariantMode::None => VariantMode::Locked,
            VariantMode::Locked => VariantMode::Rotate,
            VariantMode::Rotate => VariantMode::Bomb,
            VariantMode::Bomb => VariantMode::All,
            VariantMode::All => VariantMode::None,
        }
    }
}

/// Outcome of a tile selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The tile slid into the empty slot.
    Slid,
    /// A rotatable tile spun in place: cosmetic, no board change.
    Rotated,
    /// No-op: locked, not adjacent, or the empty slot itself.
    Rejected,
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    Select,
    Undo,
    Redo,
    Shuffle,
    GrowGrid,
    ShrinkGrid,
    CycleVariant,
    CycleTheme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_parse() {
        assert_eq!(GridSize::from_dimension(3), Some(GridSize::Three));
        assert_eq!(GridSize::from_dimension(6), Some(GridSize::Six));
        assert_eq!(GridSize::from_dimension(2), None);
        assert_eq!(GridSize::from_dimension(7), None);
        assert_eq!(GridSize::from_dimension(0), None);
    }

    #[test]
    fn test_grid_size_counts() {
        assert_eq!(GridSize::Three.cell_count(), 9);
        assert_eq!(GridSize::Six.cell_count(), MAX_CELLS);
    }

    #[test]
    fn test_grow_shrink_bounds() {
        assert_eq!(GridSize::Six.grow(), None);
        assert_eq!(GridSize::Three.shrink(), None);
        assert_eq!(GridSize::Four.grow(), Some(GridSize::Five));
    }

    #[test]
    fn test_variant_mode_parse() {
        assert_eq!(VariantMode::from_str("none"), Some(VariantMode::None));
        assert_eq!(VariantMode::from_str("ALL"), Some(VariantMode::All));
        assert_eq!(VariantMode::from_str("Bomb"), Some(VariantMode::Bomb));
        assert_eq!(VariantMode::from_str("chaos"), None);
        assert_eq!(VariantMode::from_str(""), None);
    }

    #[test]
    fn test_variant_mode_inclusion() {
        assert!(VariantMode::All.includes_locked());
        assert!(VariantMode::All.includes_rotate());
        assert!(VariantMode::All.includes_bomb());
        assert!(VariantMode::Bomb.includes_bomb());
        assert!(!VariantMode::Bomb.includes_locked());
        assert!(!VariantMode::None.includes_rotate());
    }

    #[test]
    fn test_variant_mode_cycle_covers_all() {
        let mut mode = VariantMode::None;
        for _ in 0..5 {
            mode = mode.cycle();
        }
        assert_eq!(mode, VariantMode::None);
    }
}
