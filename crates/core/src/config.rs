//! Game configuration.
//!
//! # Environment Variables
//!
//! - `GAME2048_SIZE`: board side length (default: 4)
//! - `GAME2048_MAX_PIECE`: winning tile value (default: 2048)
//!
//! Unparseable values fall back to the defaults. Explicit overrides win over the
//! environment, and validation runs once on the merged result.

use std::env;

use crate::error::{GameError, Result};
use crate::types::{Tile, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MAX_PIECE, MIN_BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub max_piece: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            max_piece: MAX_PIECE,
        }
    }
}

impl GameConfig {
    pub fn new(size: usize, max_piece: u32) -> Result<Self> {
        let config = Self { size, max_piece };
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(None, None)
    }

    /// Load from environment variables, with `size` and `max_piece` taking
    /// precedence when given
    pub fn from_env_with(size: Option<usize>, max_piece: Option<u32>) -> Result<Self> {
        Self::resolve(|key| env::var(key).ok(), size, max_piece)
    }

    fn resolve<F>(lookup: F, size: Option<usize>, max_piece: Option<u32>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let size = size
            .or_else(|| lookup("GAME2048_SIZE").and_then(|s| s.trim().parse().ok()))
            .unwrap_or(defaults.size);

        let max_piece = max_piece
            .or_else(|| lookup("GAME2048_MAX_PIECE").and_then(|s| s.trim().parse().ok()))
            .unwrap_or(defaults.max_piece);

        Self::new(size, max_piece)
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.size) {
            return Err(GameError::InvalidConfig(format!(
                "size {} outside {}..={}",
                self.size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            )));
        }
        // The smallest tile is 2, so anything below 4 would be won before play starts.
        if !Tile::is_valid_value(self.max_piece) || self.max_piece < 4 {
            return Err(GameError::InvalidConfig(format!(
                "max piece {} is not a power of two >= 4",
                self.max_piece
            )));
        }
        Ok(())
    }
}
