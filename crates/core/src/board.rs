//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell can be empty or hold a tile value.
//! Uses a flat vector in row-major order (row * size + col), with row 0 at the bottom.
//! Coordinates: (col, row) where (0, 0) is the lower-left corner.
//!
//! Every accessor goes through the current viewing perspective. Under perspective
//! `d`, a tilt toward `d` looks like a tilt toward the top of the board, so the
//! tilt engine only ever has to handle one direction. Storage is never transposed.

use std::ops::{Deref, DerefMut};

use arrayvec::ArrayVec;

use crate::error::{GameError, Result};
use crate::types::{Cell, Direction, Tile, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// One lane of cells in view coordinates, far end (top row) first
pub type Lane = ArrayVec<Cell, MAX_BOARD_SIZE>;

/// Map view coordinates under `perspective` to board coordinates.
///
/// In the view frame the direction of motion is always "up" (increasing row).
#[inline]
pub fn view_to_board(perspective: Direction, size: usize, col: usize, row: usize) -> (usize, usize) {
    let last = size - 1;
    match perspective {
        Direction::Up => (col, row),
        Direction::Down => (last - col, last - row),
        Direction::Right => (row, last - col),
        Direction::Left => (last - row, col),
    }
}

/// Inverse of [`view_to_board`].
#[inline]
pub fn board_to_view(perspective: Direction, size: usize, col: usize, row: usize) -> (usize, usize) {
    let last = size - 1;
    match perspective {
        Direction::Up => (col, row),
        Direction::Down => (last - col, last - row),
        Direction::Right => (last - row, col),
        Direction::Left => (row, last - col),
    }
}

/// The game board - N x N cells using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
    perspective: Direction,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Result<Self> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![None; size * size],
            perspective: Direction::Up,
        })
    }

    /// Build a board from raw values (0 = empty), indexed `[row][col]`
    /// with row 0 at the bottom.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GameError::MalformedGrid(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    values.len(),
                    size
                )));
            }
            for &value in values {
                if value == 0 {
                    cells.push(None);
                } else if Tile::is_valid_value(value) {
                    cells.push(Some(value));
                } else {
                    return Err(GameError::InvalidTileValue(value));
                }
            }
        }

        Ok(Self {
            size,
            cells,
            perspective: Direction::Up,
        })
    }

    /// Get side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Current viewing perspective
    pub fn perspective(&self) -> Direction {
        self.perspective
    }

    /// Make all accessors see the board as if `direction` were up
    pub fn set_viewing_perspective(&mut self, direction: Direction) {
        self.perspective = direction;
    }

    /// Back to the default perspective
    pub fn reset_perspective(&mut self) {
        self.perspective = Direction::Up;
    }

    /// View the board from `direction` until the returned guard is dropped
    pub fn view_from(&mut self, direction: Direction) -> PerspectiveGuard<'_> {
        self.set_viewing_perspective(direction);
        PerspectiveGuard { board: self }
    }

    /// Calculate flat index from view coordinates
    #[inline(always)]
    fn index(&self, col: usize, row: usize) -> Option<usize> {
        if col >= self.size || row >= self.size {
            return None;
        }
        let (c, r) = view_to_board(self.perspective, self.size, col, row);
        Some(r * self.size + c)
    }

    /// Get cell at position (col, row)
    /// Returns None if out of bounds
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at position (col, row)
    /// Returns false if out of bounds
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Tile at (col, row), if any
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.get(col, row)
            .flatten()
            .map(|value| Tile::new(value, col, row))
    }

    /// Place a tile. The target cell must be on the board and empty.
    pub fn add_tile(&mut self, tile: Tile) -> Result<()> {
        if !Tile::is_valid_value(tile.value) {
            return Err(GameError::InvalidTileValue(tile.value));
        }
        let idx = self.index(tile.col, tile.row).ok_or(GameError::OutOfBounds {
            col: tile.col,
            row: tile.row,
            size: self.size,
        })?;
        if let Some(existing) = self.cells[idx] {
            return Err(GameError::OccupiedCell {
                col: tile.col,
                row: tile.row,
                existing,
            });
        }
        self.cells[idx] = Some(tile.value);
        Ok(())
    }

    /// All tiles, bottom row first, in view coordinates
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).filter_map(move |col| self.tile(col, row)))
    }

    /// Column `col` in view coordinates, far end (top row) first
    pub fn lane(&self, col: usize) -> Lane {
        (0..self.size)
            .rev()
            .map(|row| self.get(col, row).flatten())
            .collect()
    }

    /// Write back a lane produced by [`Board::lane`]
    pub fn set_lane(&mut self, col: usize, lane: &[Cell]) {
        for (i, &cell) in lane.iter().enumerate().take(self.size) {
            self.set(col, self.size - 1 - i, cell);
        }
    }

    /// Check if position holds no tile (out of bounds is not empty)
    pub fn is_empty_at(&self, col: usize, row: usize) -> bool {
        matches!(self.get(col, row), Some(None))
    }

    /// Check if every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Sum of all tile values
    pub fn value_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile value on the board
    pub fn max_value(&self) -> Option<u32> {
        self.cells.iter().flatten().copied().max()
    }

    /// Get a reference to the internal cells array (default perspective, row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Convert to raw values (0 = empty), indexed `[row][col]`, row 0 at the bottom.
    /// Always uses the default perspective.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.unwrap_or(0)).collect())
            .collect()
    }
}

fn check_size(size: usize) -> Result<()> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(GameError::MalformedGrid(format!(
            "board size {} outside {}..={}",
            size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
        )));
    }
    Ok(())
}

/// Scoped perspective change; restores the default perspective on drop
pub struct PerspectiveGuard<'a> {
    board: &'a mut Board,
}

impl Deref for PerspectiveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PerspectiveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PerspectiveGuard<'_> {
    fn drop(&mut self) {
        self.board.reset_perspective();
    }
}
