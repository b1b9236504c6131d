//! Tilt engine - slides and merges tiles toward one side of the board.
//!
//! The board is viewed from the tilt direction, so every tilt is handled as a
//! tilt toward the top row. Each column of that view is an independent lane:
//!
//! 1. compact the lane toward the far end (no merges)
//! 2. merge equal neighbours pairwise, starting at the far end
//! 3. compact again to close the gaps left by merges
//!
//! A tile produced by a merge is recorded in a [`MergeMarks`] side table that
//! lives for a single tilt, and never takes part in a second merge.
//!
//! # Example
//!
//! ```
//! use game2048_core::board::Board;
//! use game2048_core::tilt::tilt;
//! use game2048_core::types::Direction;
//!
//! // Column 0 holds two 2s.
//! let mut board = Board::from_rows(&[[2u32, 0], [2, 0]]).unwrap();
//! let result = tilt(&mut board, Direction::Up);
//! assert!(result.changed);
//! assert_eq!(result.score_delta, 4);
//! assert_eq!(board.to_rows(), vec![vec![0, 0], vec![4, 0]]);
//! ```

use arrayvec::ArrayVec;
use log::trace;

use crate::board::Board;
use crate::types::{Cell, Direction, Tile};

/// Per-tilt record of which cells hold a freshly merged tile.
///
/// Grid shaped, indexed by view coordinates: `col * size + pos`, where `pos`
/// counts from the far end of the lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeMarks {
    size: usize,
    marks: Vec<bool>,
}

impl MergeMarks {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            marks: vec![false; size * size],
        }
    }

    /// Marks for one lane, far end first
    pub fn lane_mut(&mut self, col: usize) -> &mut [bool] {
        let start = col * self.size;
        &mut self.marks[start..start + self.size]
    }
}

/// Outcome of tilting a single lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaneOutcome {
    pub changed: bool,
    /// Sum of the values produced by merges in this lane
    pub score: u32,
    pub merges: u32,
}

/// Outcome of tilting the whole board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TiltResult {
    /// True iff any tile moved or merged
    pub changed: bool,
    pub score_delta: u32,
    pub merges: u32,
}

impl TiltResult {
    fn absorb(&mut self, lane: LaneOutcome) {
        self.changed |= lane.changed;
        self.score_delta = self.score_delta.saturating_add(lane.score);
        self.merges += lane.merges;
    }
}

/// Slide tiles toward index 0, keeping their order. Marks travel with their tiles.
/// Returns true if any tile moved.
pub fn compact(lane: &mut [Cell], marks: &mut [bool]) -> bool {
    let mut moved = false;
    for dst in 0..lane.len() {
        if lane[dst].is_some() {
            continue;
        }
        let Some(src) = (dst + 1..lane.len()).find(|&i| lane[i].is_some()) else {
            break;
        };
        lane[dst] = lane[src].take();
        marks[dst] = std::mem::take(&mut marks[src]);
        moved = true;
    }
    moved
}

/// Merge equal adjacent pairs, scanning from the far end (index 0).
///
/// The trailing tile of a pair is folded into the leading one and its slot is
/// left empty. A pair whose merged value would overflow `u32` is left as is.
/// Returns `(score, merges)`.
pub fn merge_pass(lane: &mut [Cell], marks: &mut [bool]) -> (u32, u32) {
    let mut score = 0u32;
    let mut merges = 0u32;
    let mut i = 0;
    while i + 1 < lane.len() {
        let merged = match (lane[i], lane[i + 1]) {
            (Some(lead), Some(trail)) if lead == trail && !marks[i] && !marks[i + 1] => {
                Tile::merged_value(lead)
            }
            _ => None,
        };
        match merged {
            Some(merged) => {
                lane[i] = Some(merged);
                lane[i + 1] = None;
                marks[i] = true;
                score = score.saturating_add(merged);
                merges += 1;
                // The trailing slot is consumed; the next pair starts after it.
                i += 2;
            }
            None => i += 1,
        }
    }
    (score, merges)
}

/// Tilt one lane toward its far end (index 0).
///
/// `marks` must be the same length as `lane` and all false on entry.
pub fn tilt_lane(lane: &mut [Cell], marks: &mut [bool]) -> LaneOutcome {
    debug_assert_eq!(lane.len(), marks.len());

    let moved = compact(lane, marks);
    let (score, merges) = merge_pass(lane, marks);
    if merges > 0 {
        compact(lane, marks);
    }

    LaneOutcome {
        changed: moved || merges > 0,
        score,
        merges,
    }
}

/// Tilt the whole board toward `direction`.
///
/// The board's perspective is back at the default when this returns.
pub fn tilt(board: &mut Board, direction: Direction) -> TiltResult {
    let size = board.size();
    let mut marks = MergeMarks::new(size);
    let mut result = TiltResult::default();

    {
        let mut view = board.view_from(direction);
        for col in 0..size {
            let mut lane = view.lane(col);
            let outcome = tilt_lane(&mut lane, marks.lane_mut(col));
            if outcome.changed {
                view.set_lane(col, &lane);
            }
            result.absorb(outcome);
        }
    }

    trace!(
        "tilt {}: changed={} score_delta={} merges={}",
        direction.as_str(),
        result.changed,
        result.score_delta,
        result.merges
    );
    result
}

/// Directions in which a tilt would change the board
pub fn available_moves(board: &Board) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| {
            let mut probe = board.clone();
            tilt(&mut probe, dir).changed
        })
        .collect()
}
