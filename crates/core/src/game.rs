//! Game session - ties the board, tilt engine and status together.
//!
//! The session owns the board and a [`GameState`] value. After every mutation
//! (tile placement, tilt, clear) the state is recomputed from the board rather
//! than patched, and the new state is handed back to the caller.

use std::fmt;
use std::hash::{Hash, Hasher};

use log::debug;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::status::{is_game_over, GameState};
use crate::tilt::{self, TiltResult};
use crate::types::{Direction, Tile, MAX_PIECE};

/// Result of a tilt as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiltOutcome {
    /// True iff any tile moved or merged; callers spawn a new tile only then
    pub changed: bool,
    pub score_delta: u32,
    pub merges: u32,
    /// State after the tilt
    pub state: GameState,
}

/// Parse a direction name, rejecting anything outside the four sides
pub fn parse_direction(name: &str) -> Result<Direction> {
    Direction::from_str(name).ok_or_else(|| GameError::InvalidDirection(name.to_string()))
}

/// A single game of 2048
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    max_piece: u32,
}

impl Game {
    /// A new game with an empty board and score 0
    pub fn new(config: GameConfig) -> Result<Self> {
        let board = Board::new(config.size)?;
        config.validate()?;
        Ok(Self {
            board,
            state: GameState::default(),
            max_piece: config.max_piece,
        })
    }

    /// A new game on a `size` x `size` board with the default winning value
    pub fn with_size(size: usize) -> Result<Self> {
        Self::new(GameConfig {
            size,
            ..GameConfig::default()
        })
    }

    /// A game from raw values (0 = empty), indexed `[row][col]` with row 0 at the
    /// bottom. The end-of-game flag is computed from the board.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R], score: u32, max_score: u32) -> Result<Self> {
        Self::from_board(Board::from_rows(rows)?, GameState::new(score, max_score), MAX_PIECE)
    }

    /// A game from an existing board and score record
    pub fn from_board(mut board: Board, state: GameState, max_piece: u32) -> Result<Self> {
        GameConfig::new(board.size(), max_piece)?;
        board.reset_perspective();
        let mut game = Self {
            board,
            state,
            max_piece,
        };
        game.refresh();
        Ok(game)
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Best score so far (updated when a game ends)
    pub fn max_score(&self) -> u32 {
        self.state.max_score
    }

    pub fn max_piece(&self) -> u32 {
        self.max_piece
    }

    /// True iff a tile reached the winning value or no move remains
    pub fn game_over(&self) -> bool {
        self.state.game_over
    }

    /// Tile at (col, row), if any
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.board.tile(col, row)
    }

    /// Place a tile on an empty cell
    pub fn add_tile(&mut self, tile: Tile) -> Result<GameState> {
        if let Err(e) = self.board.add_tile(tile) {
            debug!("rejected tile {:?}: {}", tile, e);
            return Err(e);
        }
        self.refresh();
        Ok(self.state)
    }

    /// Tilt the board toward `direction`
    pub fn tilt(&mut self, direction: Direction) -> TiltOutcome {
        let TiltResult {
            changed,
            score_delta,
            merges,
        } = tilt::tilt(&mut self.board, direction);

        self.state = self.state.add_score(score_delta);
        self.refresh();

        TiltOutcome {
            changed,
            score_delta,
            merges,
            state: self.state,
        }
    }

    /// Tilt toward a direction given by name
    pub fn tilt_named(&mut self, name: &str) -> Result<TiltOutcome> {
        let direction = parse_direction(name)?;
        Ok(self.tilt(direction))
    }

    /// Clear the board and reset the score. The max score is kept.
    pub fn clear(&mut self) {
        self.board.clear();
        self.state = self.state.reset();
        debug!("game cleared (max score {})", self.state.max_score);
    }

    fn refresh(&mut self) {
        let over = is_game_over(&self.board, self.max_piece);
        if over && !self.state.game_over {
            debug!(
                "game over: score {} (previous max {})",
                self.state.score, self.state.max_score
            );
        }
        self.state = self.state.settle(over);
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        writeln!(f)?;
        writeln!(f, "[")?;
        for row in (0..size).rev() {
            for col in 0..size {
                match self.board.get(col, row).flatten() {
                    Some(value) => write!(f, "|{:>4}", value)?,
                    None => write!(f, "|    ")?,
                }
            }
            writeln!(f, "|")?;
        }
        let over = if self.game_over() { "over" } else { "not over" };
        writeln!(
            f,
            "] {} (max: {}) (game is {}) ",
            self.score(),
            self.max_score(),
            over
        )
    }
}

/// Two games are equal iff they render identically
impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Game {}

impl Hash for Game {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}
