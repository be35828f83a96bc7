//! Piece module - the active tetromino and its shape table
//!
//! A piece is four absolute grid points. Every move builds a candidate point
//! set, validates it against the grid and either replaces the current points
//! or is dropped, so a rejected move never changes the piece.

use crate::grid::Grid;
use crate::types::{Point, Variant, BOARD_HEIGHT, BOARD_WIDTH};

/// Four points of a piece, in shape-table order.
pub type PiecePoints = [Point; 4];

/// Shape table, one row per variant in [`Variant::ALL`] order.
///
/// Each entry `v` is a cell of a 2-wide, 4-tall box: `x = v % 2`, `y = v / 2`.
///
/// ```text
/// 0 1
/// 2 3
/// 4 5
/// 6 7
/// ```
pub const SHAPES: [[u8; 4]; 7] = [
    [1, 3, 5, 7], // I
    [2, 4, 5, 7], // Z
    [3, 5, 4, 6], // S
    [3, 5, 4, 7], // T
    [2, 3, 5, 7], // L
    [3, 5, 7, 6], // J
    [2, 3, 4, 5], // O
];

/// Index of the rotation pivot within the point list.
pub const PIVOT: usize = 1;

/// Decode a variant's table row into spawn points.
pub fn spawn_points(variant: Variant) -> PiecePoints {
    let row = SHAPES[variant.table_row()];
    row.map(|v| Point::new((v % 2) as i8, (v / 2) as i8))
}

/// Placement check for a candidate point set.
///
/// x is bounded on both sides, y only from below the grid: points above row 0
/// are allowed and skip the occupancy check.
pub fn is_valid(points: &PiecePoints, grid: &Grid) -> bool {
    points.iter().all(|p| {
        if p.x < 0 || p.x >= BOARD_WIDTH as i8 || p.y >= BOARD_HEIGHT as i8 {
            return false;
        }
        p.y < 0 || grid.occupancy(p.y as usize, p.x as usize).is_none()
    })
}

/// Points rotated 90° about `points[PIVOT]`.
pub fn rotated(points: &PiecePoints) -> PiecePoints {
    let pivot = points[PIVOT];
    points.map(|p| {
        let rel_x = p.y - pivot.y;
        let rel_y = p.x - pivot.x;
        Point::new(pivot.x - rel_x, pivot.y + rel_y)
    })
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    variant: Variant,
    points: PiecePoints,
}

impl Piece {
    /// Create a piece at the shape table's origin.
    pub fn spawn(variant: Variant) -> Self {
        let points = spawn_points(variant);
        debug_assert!(
            points
                .iter()
                .all(|p| p.x >= 0 && p.x < BOARD_WIDTH as i8 && p.y >= 0 && p.y < BOARD_HEIGHT as i8),
            "shape table entry for {variant:?} decodes outside the grid"
        );
        Self { variant, points }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn points(&self) -> &PiecePoints {
        &self.points
    }

    /// Whether the current points fit the grid.
    pub fn fits(&self, grid: &Grid) -> bool {
        is_valid(&self.points, grid)
    }

    fn try_replace(&mut self, candidate: PiecePoints, grid: &Grid) -> bool {
        if is_valid(&candidate, grid) {
            self.points = candidate;
            true
        } else {
            false
        }
    }

    /// Shift horizontally; no-op if blocked.
    pub fn try_move(&mut self, dx: i8, grid: &Grid) -> bool {
        self.try_replace(self.points.map(|p| p.offset(dx, 0)), grid)
    }

    /// Rotate about the pivot cell; no-op if blocked.
    pub fn try_rotate(&mut self, grid: &Grid) -> bool {
        self.try_replace(rotated(&self.points), grid)
    }

    /// Move one row down. Returns false when the piece has landed.
    pub fn try_fall(&mut self, grid: &Grid) -> bool {
        self.try_replace(self.points.map(|p| p.offset(0, 1)), grid)
    }
}
