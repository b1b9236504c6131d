//! Game status - end-of-game detection and the score record.
//!
//! A game is over when a tile reaches the winning value, or when the board is
//! full and no two edge-adjacent tiles are equal. Every cell is inspected;
//! border and corner cells simply have fewer neighbours.

use crate::board::Board;
use crate::types::{Cell, Tile};

/// Returns true if at least one cell is empty
pub fn empty_space_exists(board: &Board) -> bool {
    !board.is_full()
}

/// Returns true if any tile has reached `max_piece`
pub fn max_tile_exists(board: &Board, max_piece: u32) -> bool {
    board.cells().iter().flatten().any(|&v| v == max_piece)
}

/// Returns true if some tilt would change the board: either a cell is empty,
/// or two edge-adjacent tiles hold equal values that can still merge.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    if empty_space_exists(board) {
        return true;
    }

    let size = board.size();
    let cells = board.cells();
    for row in 0..size {
        for col in 0..size {
            let here = cells[row * size + col];
            // Checking right and up from every cell covers each adjacent pair once.
            if col + 1 < size && mergeable(here, cells[row * size + col + 1]) {
                return true;
            }
            if row + 1 < size && mergeable(here, cells[(row + 1) * size + col]) {
                return true;
            }
        }
    }
    false
}

fn mergeable(a: Cell, b: Cell) -> bool {
    matches!((a, b), (Some(x), Some(y)) if x == y && Tile::merged_value(x).is_some())
}

/// Determine whether the game is over.
pub fn is_game_over(board: &Board, max_piece: u32) -> bool {
    max_tile_exists(board, max_piece) || !at_least_one_move_exists(board)
}

/// Score record of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    pub score: u32,
    /// Best score so far; only raised when a game ends
    pub max_score: u32,
    pub game_over: bool,
}

impl GameState {
    pub fn new(score: u32, max_score: u32) -> Self {
        Self {
            score,
            max_score,
            game_over: false,
        }
    }

    /// State with `delta` points added to the score
    pub fn add_score(self, delta: u32) -> Self {
        Self {
            score: self.score.saturating_add(delta),
            ..self
        }
    }

    /// State with the freshly computed end-of-game flag applied.
    ///
    /// When `over` is true the max score is raised to the current score if
    /// needed. Settling an already-settled state returns it unchanged.
    pub fn settle(self, over: bool) -> Self {
        let max_score = if over {
            self.max_score.max(self.score)
        } else {
            self.max_score
        };
        Self {
            game_over: over,
            max_score,
            ..self
        }
    }

    /// State for a fresh game: score and flag reset, max score kept
    pub fn reset(self) -> Self {
        Self {
            score: 0,
            max_score: self.max_score,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_PIECE;

    #[test]
    fn test_empty_board_has_moves() {
        let board = Board::new(4).unwrap();
        assert!(empty_space_exists(&board));
        assert!(at_least_one_move_exists(&board));
        assert!(!is_game_over(&board, MAX_PIECE));
    }

    #[test]
    fn test_max_tile_ends_game() {
        let board = Board::from_rows(&[[2048u32, 0], [0, 0]]).unwrap();
        assert!(max_tile_exists(&board, MAX_PIECE));
        assert!(is_game_over(&board, MAX_PIECE));
        // A different winning value is honoured.
        assert!(!is_game_over(&board, 4096));
    }

    #[test]
    fn test_full_board_without_pairs_is_over() {
        let board = Board::from_rows(&[[2u32, 4, 2], [4, 2, 4], [2, 4, 2]]).unwrap();
        assert!(!empty_space_exists(&board));
        assert!(!at_least_one_move_exists(&board));
        assert!(is_game_over(&board, MAX_PIECE));
    }

    #[test]
    fn test_pair_on_non_corner_edge_is_a_move() {
        // The only equal pair sits on the middle of the top edge.
        let board = Board::from_rows(&[[2u32, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 8, 8, 2]])
            .unwrap();
        assert!(at_least_one_move_exists(&board));

        // Vertical pair on the middle of the right edge.
        let board = Board::from_rows(&[[2u32, 4, 2, 4], [4, 2, 4, 16], [2, 4, 2, 16], [4, 2, 4, 2]])
            .unwrap();
        assert!(at_least_one_move_exists(&board));
    }

    #[test]
    fn test_pair_too_large_to_merge_is_not_a_move() {
        let top = 1u32 << 31;
        let board = Board::from_rows(&[[top, top], [2, 4]]).unwrap();
        assert!(!at_least_one_move_exists(&board));
        assert!(crate::tilt::available_moves(&board).is_empty());

        let board = Board::from_rows(&[[1u32 << 30, 1 << 30], [2, 4]]).unwrap();
        assert!(at_least_one_move_exists(&board));
    }

    #[test]
    fn test_settle_is_idempotent() {
        let state = GameState::new(120, 100);
        let over = state.settle(true);
        assert!(over.game_over);
        assert_eq!(over.max_score, 120);
        assert_eq!(over.settle(true), over);

        // A lower score never lowers the record.
        let state = GameState::new(50, 100).settle(true);
        assert_eq!(state.max_score, 100);

        // Not over: the record is untouched.
        let state = GameState::new(500, 100).settle(false);
        assert_eq!(state.max_score, 100);
        assert!(!state.game_over);
    }

    #[test]
    fn test_reset_keeps_record() {
        let state = GameState::new(300, 0).settle(true).reset();
        assert_eq!(state, GameState::new(0, 300));
    }
}
