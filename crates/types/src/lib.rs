//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no I/O, usable from the core simulation,
//! the input layer and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: the shape table's own origin (columns 0-1, rows 0-3)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `FALL_DELAY_MS` | 300 | Gravity delay |
//! | `SOFT_DROP_DELAY_MS` | 50 | Gravity delay while down is held |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Down key auto-release without release events |
//!
//! # Examples
//!
//! ```
//! use tetris_mini_types::{Variant, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let variant = Variant::T;
//! assert_eq!(variant.index(), 4);
//! assert_eq!(Variant::try_from(4u8), Ok(Variant::T));
//! assert_eq!(Variant::from_str("t"), Some(Variant::T));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use thiserror::Error;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity delay in milliseconds.
pub const FALL_DELAY_MS: u32 = 300;

/// Gravity delay while the down key is held.
pub const SOFT_DROP_DELAY_MS: u32 = 50;

/// Score awarded per cleared row.
pub const SCORE_PER_LINE: u32 = 100;

/// Without key-release events, a held down key counts as released after this long.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Error converting a raw value into a [`Variant`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("variant index {0} is outside 1..=7")]
    OutOfRange(u8),
    #[error("unknown variant name {0:?}")]
    UnknownName(String),
}

/// The seven tetromino variants, in shape-table order.
///
/// Each variant carries a fixed colour/tile index `1..=7`:
/// I=1, Z=2, S=3, T=4, L=5, J=6, O=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    I,
    Z,
    S,
    T,
    L,
    J,
    O,
}

impl Variant {
    /// All variants in table order.
    pub const ALL: [Variant; 7] = [
        Variant::I,
        Variant::Z,
        Variant::S,
        Variant::T,
        Variant::L,
        Variant::J,
        Variant::O,
    ];

    /// Colour/tile index in `1..=7`.
    pub fn index(self) -> u8 {
        self.table_row() as u8 + 1
    }

    /// Row of this variant in the shape table (`0..7`).
    pub fn table_row(self) -> usize {
        match self {
            Variant::I => 0,
            Variant::Z => 1,
            Variant::S => 2,
            Variant::T => 3,
            Variant::L => 4,
            Variant::J => 5,
            Variant::O => 6,
        }
    }

    /// Parse variant from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_mini_types::Variant;
    ///
    /// assert_eq!(Variant::from_str("i"), Some(Variant::I));
    /// assert_eq!(Variant::from_str("O"), Some(Variant::O));
    /// assert_eq!(Variant::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(Variant::I),
            "z" => Some(Variant::Z),
            "s" => Some(Variant::S),
            "t" => Some(Variant::T),
            "l" => Some(Variant::L),
            "j" => Some(Variant::J),
            "o" => Some(Variant::O),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = VariantError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=7 => Ok(Variant::ALL[(value - 1) as usize]),
            _ => Err(VariantError::OutOfRange(value)),
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = VariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::from_str(s).ok_or_else(|| VariantError::UnknownName(s.to_string()))
    }
}

/// A cell on the game grid
///
/// - `None`: Empty cell
/// - `Some(Variant)`: Settled block of that variant
pub type Cell = Option<Variant>;

/// Numeric cell form: 0 for empty, otherwise the variant index.
pub fn cell_to_u8(cell: Cell) -> u8 {
    cell.map_or(0, Variant::index)
}

/// Inverse of [`cell_to_u8`].
pub fn cell_from_u8(value: u8) -> Result<Cell, VariantError> {
    if value == 0 {
        Ok(None)
    } else {
        Variant::try_from(value).map(Some)
    }
}

/// Column/row coordinate. `y` may be negative above the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Game actions that can be applied outside the per-frame input path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° about its pivot cell
    Rotate,
    /// Drop piece one cell, locking it if it cannot fall
    SoftDrop,
    /// Toggle pause state
    Pause,
    /// Restart the game
    Restart,
}

/// Input gathered for one frame.
///
/// `rotate`, `left` and `right` are edge/auto-repeat events for this frame;
/// `soft_drop` is level-triggered (down currently held).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub rotate: bool,
    pub left: bool,
    pub right: bool,
    pub soft_drop: bool,
}

impl FrameInput {
    /// Horizontal step for this frame. Right wins when both are set.
    pub fn dx(&self) -> i8 {
        if self.right {
            1
        } else if self.left {
            -1
        } else {
            0
        }
    }

    pub fn is_idle(&self) -> bool {
        *self == FrameInput::default()
    }
}

/// Event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub variant: Variant,
    pub lines_cleared: u32,
    pub score_delta: u32,
    pub top_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(FALL_DELAY_MS, 300);
        assert_eq!(SOFT_DROP_DELAY_MS, 50);
        assert_eq!(SCORE_PER_LINE, 100);
    }

    #[test]
    fn variant_indices_follow_shape_table_order() {
        let indices: Vec<u8> = Variant::ALL.iter().map(|v| v.index()).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(Variant::ALL[0], Variant::I);
        assert_eq!(Variant::ALL[6], Variant::O);
    }

    #[test]
    fn variant_rejects_out_of_range_index() {
        assert_eq!(Variant::try_from(0u8), Err(VariantError::OutOfRange(0)));
        assert_eq!(Variant::try_from(8u8), Err(VariantError::OutOfRange(8)));
        for v in Variant::ALL {
            assert_eq!(Variant::try_from(v.index()), Ok(v));
        }
    }

    #[test]
    fn cell_numeric_form() {
        assert_eq!(cell_to_u8(None), 0);
        assert_eq!(cell_to_u8(Some(Variant::O)), 7);
        assert_eq!(cell_from_u8(0), Ok(None));
        assert_eq!(cell_from_u8(2), Ok(Some(Variant::Z)));
        assert!(cell_from_u8(9).is_err());
    }

    #[test]
    fn point_offset() {
        assert_eq!(Point::new(1, 2).offset(-1, 3), Point::new(0, 5));
    }
}
