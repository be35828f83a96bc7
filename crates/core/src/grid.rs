//! Grid module - settled cells and line clearing
//!
//! The grid is 10x20, each cell empty or holding the variant that settled there.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{cell_to_u8, Cell, Point, Variant, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by one [`Grid::clear_full_rows`] call, bottom to top.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// Result of writing a landed piece into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Every cell landed inside the grid.
    Settled,
    /// At least one cell was above row 0 and was dropped.
    Overflow,
}

/// The settled-cell grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Row-major cells (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at `(row, col)`.
    ///
    /// Callers must stay in bounds; the collision check never asks outside the grid.
    pub fn occupancy(&self, row: usize, col: usize) -> Cell {
        assert!(col < WIDTH, "column {col} out of bounds");
        self.cells[row * WIDTH + col]
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_free(&self, point: Point) -> bool {
        matches!(self.get(point.x, point.y), Some(None))
    }

    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Write a landed piece's cells.
    ///
    /// Every on-grid point must be empty. Points above row 0 are dropped and
    /// reported as [`CommitOutcome::Overflow`].
    pub fn commit(&mut self, points: &[Point; 4], variant: Variant) -> CommitOutcome {
        let mut outcome = CommitOutcome::Settled;
        for p in points {
            if p.y < 0 {
                outcome = CommitOutcome::Overflow;
                continue;
            }
            debug_assert!(self.is_free(*p), "commit onto occupied cell {p:?}");
            self.set(p.x, p.y, Some(variant));
        }
        outcome
    }

    /// Remove every full row and compact the rest downwards.
    ///
    /// Two-pointer pass from the bottom: non-full rows are copied to the write
    /// cursor, full rows are skipped. Rows left above the cursor are emptied.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        // Row 0 is scanned like any other; a full top row is cleared and scored.
        self.cells[..write_y * WIDTH].fill(None);
        cleared
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Numeric copy of the grid (0 = empty, 1..=7 = variant).
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = cell_to_u8(*s);
            }
        }
    }

    /// Fill a whole row, for setting up tests and benchmarks.
    pub fn fill_row(&mut self, y: usize, variant: Variant) {
        if y < HEIGHT {
            let start = y * WIDTH;
            self.cells[start..start + WIDTH].fill(Some(variant));
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
