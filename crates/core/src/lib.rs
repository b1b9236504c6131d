//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of a 2048-style sliding-tile puzzle.
//! It has **no dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: A tilt is a pure function of the board and direction
//! - **Testable**: Single lanes can be tilted in isolation
//! - **Portable**: Runs anywhere a caller can drive it (replay script, GUI, bot)
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid with a switchable viewing perspective
//! - [`tilt`]: Compaction and pairwise merging along each lane
//! - [`status`]: End-of-game detection and the score record
//! - [`game`]: Game session combining the three, with the textual rendering
//! - [`config`]: Board size and winning value, optionally from the environment
//! - [`error`]: Rejected-operation taxonomy
//!
//! # Game Rules
//!
//! - **Tilt**: All tiles slide as far as possible toward one side
//! - **Merge**: Two equal tiles adjacent in the direction of motion merge into one
//!   of twice the value, and that value is added to the score
//! - **Merge once**: A tile produced by a merge does not merge again in the same tilt
//! - **Runs of three**: The two tiles nearest the destination merge; the third waits
//! - **Game over**: A tile reaches the winning value, or the board is full with
//!   no equal neighbours
//!
//! # Example
//!
//! ```
//! use game2048_core::Game;
//! use game2048_types::{Direction, Tile};
//!
//! let mut game = Game::with_size(4).unwrap();
//! game.add_tile(Tile::new(2, 0, 0)).unwrap();
//! game.add_tile(Tile::new(2, 0, 3)).unwrap();
//!
//! let outcome = game.tilt(Direction::Up);
//! assert!(outcome.changed);
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.tile(0, 3).map(|t| t.value), Some(4));
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod status;
pub mod tilt;

pub use game2048_types as types;

// Re-export commonly used types for convenience
pub use board::{board_to_view, view_to_board, Board, PerspectiveGuard};
pub use config::GameConfig;
pub use error::GameError;
pub use game::{parse_direction, Game, TiltOutcome};
pub use status::{
    at_least_one_move_exists, empty_space_exists, is_game_over, max_tile_exists, GameState,
};
pub use tilt::{available_moves, tilt, tilt_lane, LaneOutcome, MergeMarks, TiltResult};
