//! Error taxonomy for rejected operations.
//!
//! Every variant is returned before any mutation happens, so a rejected call
//! leaves the board and game state exactly as they were.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A tile was placed onto a cell that already holds one.
    #[error("cell ({col}, {row}) is already occupied by {existing}")]
    OccupiedCell { col: usize, row: usize, existing: u32 },
    #[error("position ({col}, {row}) is outside a {size}x{size} board")]
    OutOfBounds { col: usize, row: usize, size: usize },
    #[error("tile value {0} is not a power of two >= 2")]
    InvalidTileValue(u32),
    #[error("unknown direction: {0:?}")]
    InvalidDirection(String),
    #[error("malformed grid: {0}")]
    MalformedGrid(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
