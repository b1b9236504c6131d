//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, replay driver, benches).
//!
//! # Board Coordinates
//!
//! Cells are addressed as `(col, row)`, like `(x, y)` coordinates:
//!
//! - **Origin**: `(0, 0)` is the lower-left corner
//! - **Columns**: grow to the right
//! - **Rows**: grow upward
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 4 | Side length of a standard board |
//! | `MIN_BOARD_SIZE` | 2 | Smallest board that still has a lane to tilt |
//! | `MAX_BOARD_SIZE` | 16 | Largest supported board (bounds lane buffers) |
//! | `MAX_PIECE` | 2048 | Default winning tile value |
//!
//! # Examples
//!
//! ```
//! use game2048_types::{Direction, Tile, MAX_PIECE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! // Tiles carry a value and a position
//! let tile = Tile::new(2, 0, 3);
//! assert_eq!(Tile::merged_value(tile.value), Some(4));
//! assert!(Tile::is_valid_value(MAX_PIECE));
//! ```

/// Side length of a standard board
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Smallest accepted board side length
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest accepted board side length
pub const MAX_BOARD_SIZE: usize = 16;

/// Default winning tile value
pub const MAX_PIECE: u32 = 2048;

/// Cell on the board (None = empty, Some = tile value)
pub type Cell = Option<u32>;

/// Tilt directions (Up = default viewing perspective)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive, compass names accepted)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" | "north" | "n" => Some(Direction::Up),
            "down" | "d" | "south" | "s" => Some(Direction::Down),
            "left" | "l" | "west" | "w" => Some(Direction::Left),
            "right" | "r" | "east" | "e" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Up
    }
}

/// A numbered tile at a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub value: u32,
    pub col: usize,
    pub row: usize,
}

impl Tile {
    pub fn new(value: u32, col: usize, row: usize) -> Self {
        Self { value, col, row }
    }

    /// Value produced by merging two tiles of `value`.
    ///
    /// None when the result would not fit in a `u32`; such a pair stays unmerged.
    pub fn merged_value(value: u32) -> Option<u32> {
        value.checked_mul(2)
    }

    /// Tile values are powers of two, starting at 2
    pub fn is_valid_value(value: u32) -> bool {
        value >= 2 && value.is_power_of_two()
    }
}
