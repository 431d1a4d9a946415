//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of cell identifiers (`0` = empty, `1..=7` = locked shape).
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Pieces may hang above row 0 (negative y); those cells are never checked against
//! the grid and are dropped when a piece locks.

use arrayvec::ArrayVec;

use crate::shapes::occupied_cells;
use crate::types::{Cell, Grid, ShapeMatrix, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL, SHAPE_COUNT};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by a single line clear, top to bottom
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[EMPTY_CELL; WIDTH]; HEIGHT],
        }
    }

    /// Build a board from raw rows.
    ///
    /// Identifiers above the catalog range are treated as empty so every cell
    /// stays within `0..=7`.
    pub fn from_rows(mut rows: Grid) -> Self {
        for cell in rows.iter_mut().flatten() {
            if *cell > SHAPE_COUNT {
                *cell = EMPTY_CELL;
            }
        }
        Self { rows }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize, x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|(row, col)| self.rows[row][col])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds or `cell` is not a catalog identifier
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if cell > SHAPE_COUNT {
            return false;
        }
        match Self::index(x, y) {
            Some((row, col)) => {
                self.rows[row][col] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether `matrix` fits with its origin at (x, y).
    ///
    /// Every occupied cell must be within the side walls and above the floor.
    /// Cells above row 0 skip the occupancy check.
    pub fn is_valid_position(&self, matrix: &ShapeMatrix, x: i8, y: i8) -> bool {
        for (dx, dy) in occupied_cells(matrix) {
            let px = x as i16 + dx as i16;
            let py = y as i16 + dy as i16;
            if px < 0 || px >= BOARD_WIDTH as i16 || py >= BOARD_HEIGHT as i16 {
                return false;
            }
            if py >= 0 && self.rows[py as usize][px as usize] != EMPTY_CELL {
                return false;
            }
        }
        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.rows[y].iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Write `id` into the grid for every occupied cell of `matrix` at (x, y).
    ///
    /// Cells outside the grid are skipped. Returns the number of cells written.
    pub fn lock_piece(&mut self, matrix: &ShapeMatrix, x: i8, y: i8, id: Cell) -> usize {
        let mut written = 0;
        for (dx, dy) in occupied_cells(matrix) {
            let px = x.saturating_add(dx);
            let py = y.saturating_add(dy);
            if self.set(px, py, id) {
                written += 1;
            }
        }
        written
    }

    /// Clear all full rows and return their indices (sorted top to bottom).
    ///
    /// Surviving rows keep their relative order and settle at the bottom; the
    /// freed rows at the top are emptied. The grid always keeps 20 rows.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = HEIGHT;

        // Scan from bottom to top
        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    self.rows[write_y] = self.rows[read_y];
                }
            }
        }

        for row in &mut self.rows[..write_y] {
            *row = [EMPTY_CELL; WIDTH];
        }

        cleared_rows.reverse();
        cleared_rows
    }

    /// Get a reference to the rows
    pub fn rows(&self) -> &Grid {
        &self.rows
    }

    /// Count of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&cell| cell != EMPTY_CELL)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
