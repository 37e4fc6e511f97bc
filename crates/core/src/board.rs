//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell is empty or holds a tile value.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where both range 0..3, row 0 at the top.

use arrayvec::ArrayVec;

use crate::error::PlaceError;
use crate::types::{Cell, Pos, TileValue, GRID_CELLS, GRID_SIZE};

/// Neighbor offsets in scan order: up, down, left, right.
///
/// The merge cascade fires on the first qualifying neighbor, so this order is
/// part of the game rules.
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The game board - 4 rows x 4 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * GRID_SIZE + col)
    cells: [Cell; GRID_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Build a board from row-major rows
    pub fn from_rows(rows: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                board.cells[r * GRID_SIZE + c] = *cell;
            }
        }
        board
    }

    #[inline(always)]
    fn index(pos: Pos) -> Option<usize> {
        if !pos.in_bounds() {
            return None;
        }
        Some(pos.row * GRID_SIZE + pos.col)
    }

    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Get cell at `pos`. Returns None if out of bounds.
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    /// Tile value at `pos`, or None when empty or out of bounds
    pub fn value(&self, pos: Pos) -> Option<TileValue> {
        self.get(pos).flatten()
    }

    /// Set cell at `pos`. Returns false if out of bounds.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_occupied(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(Some(_)))
    }

    /// True iff every cell is unoccupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// True iff every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// In-bounds orthogonal neighbors of `pos`, in up, down, left, right order
    pub fn neighbors_of(&self, pos: Pos) -> ArrayVec<Pos, 4> {
        let mut out = ArrayVec::new();
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(row), Some(col)) = (
                pos.row.checked_add_signed(dr),
                pos.col.checked_add_signed(dc),
            ) else {
                continue;
            };
            let n = Pos::new(row, col);
            if n.in_bounds() {
                out.push(n);
            }
        }
        out
    }

    pub fn has_occupied_neighbor(&self, pos: Pos) -> bool {
        self.neighbors_of(pos)
            .iter()
            .any(|&n| self.is_occupied(n))
    }

    /// Check whether a tile may be placed at `pos` without touching the board
    pub fn check_place(&self, pos: Pos) -> Result<(), PlaceError> {
        match self.get(pos) {
            None => Err(PlaceError::OutOfBounds),
            Some(Some(_)) => Err(PlaceError::OccupiedCell),
            Some(None) if !self.is_empty() && !self.has_occupied_neighbor(pos) => {
                Err(PlaceError::IsolatedPlacement)
            }
            Some(None) => Ok(()),
        }
    }

    /// Place `value` at `pos` if the placement is legal
    ///
    /// The first tile may go anywhere; every later tile must touch an
    /// occupied cell orthogonally.
    pub fn place(&mut self, pos: Pos, value: TileValue) -> Result<(), PlaceError> {
        self.check_place(pos)?;
        self.set(pos, Some(value));
        Ok(())
    }

    /// Iterate every coordinate in row-major order
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Pos::new(row, col)))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid out as rows (for snapshots and rendering)
    pub fn to_rows(&self) -> [[Cell; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[None; GRID_SIZE]; GRID_SIZE];
        for (i, cell) in self.cells.iter().enumerate() {
            rows[i / GRID_SIZE][i % GRID_SIZE] = *cell;
        }
        rows
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; GRID_CELLS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
