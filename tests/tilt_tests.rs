//! Tilt tests - sliding, merging and scoring on whole boards

use game2048::core::{tilt, Board};
use game2048::types::{Direction, Tile};

/// Build a 4x4 board whose column 0 holds `lane` from the bottom up.
fn column(lane: [u32; 4]) -> Board {
    let rows: Vec<Vec<u32>> = lane.iter().map(|&v| vec![v, 0, 0, 0]).collect();
    Board::from_rows(&rows).unwrap()
}

fn column_values(board: &Board) -> Vec<u32> {
    (0..4)
        .map(|row| board.get(0, row).flatten().unwrap_or(0))
        .collect()
}

#[test]
fn test_triple_run_tie_break() {
    // 2, 2, 2 with the empty cell at the top; tilt toward it.
    let mut board = column([2, 2, 2, 0]);
    let result = tilt(&mut board, Direction::Up);
    assert!(result.changed);
    assert_eq!(result.score_delta, 4);
    assert_eq!(result.merges, 1);
    // The pair nearest the top merged, the bottom 2 followed it up unmerged.
    assert_eq!(column_values(&board), vec![0, 0, 2, 4]);
}

#[test]
fn test_four_equal_lane() {
    let mut board = column([2, 2, 2, 2]);
    let result = tilt(&mut board, Direction::Up);
    assert_eq!(result.score_delta, 8);
    assert_eq!(result.merges, 2);
    assert_eq!(column_values(&board), vec![0, 0, 4, 4]);
}

#[test]
fn test_merged_tile_does_not_merge_again() {
    // 4 on top, then 2, 2: the new 4 must not join the old one.
    let mut board = column([2, 2, 4, 0]);
    let result = tilt(&mut board, Direction::Up);
    assert_eq!(result.score_delta, 4);
    assert_eq!(column_values(&board), vec![0, 0, 4, 4]);

    // The next tilt merges them.
    let result = tilt(&mut board, Direction::Up);
    assert_eq!(result.score_delta, 8);
    assert_eq!(column_values(&board), vec![0, 0, 0, 8]);
}

#[test]
fn test_gap_between_equal_tiles_still_merges() {
    let mut board = column([2, 0, 0, 2]);
    let result = tilt(&mut board, Direction::Up);
    assert_eq!(result.score_delta, 4);
    assert_eq!(column_values(&board), vec![0, 0, 0, 4]);
}

#[test]
fn test_blocked_lane_reports_unchanged() {
    let mut board = column([0, 0, 4, 2]);
    let before = board.clone();
    let result = tilt(&mut board, Direction::Up);
    assert!(!result.changed);
    assert_eq!(result.score_delta, 0);
    assert_eq!(board, before);
}

#[test]
fn test_tilt_down_on_same_lane() {
    // Tilting down, the pair nearest the bottom wins.
    let mut board = column([0, 2, 2, 2]);
    let result = tilt(&mut board, Direction::Down);
    assert_eq!(result.score_delta, 4);
    assert_eq!(column_values(&board), vec![4, 2, 0, 0]);
}

#[test]
fn test_rows_merge_independently() {
    let mut board = Board::from_rows(&[
        [2u32, 2, 2, 2],
        [4, 0, 4, 8],
        [0, 0, 0, 0],
        [8, 8, 16, 0],
    ])
    .unwrap();
    let result = tilt(&mut board, Direction::Right);
    assert!(result.changed);
    assert_eq!(result.score_delta, 4 + 4 + 8 + 16);
    assert_eq!(result.merges, 4);
    assert_eq!(
        board.to_rows(),
        vec![
            vec![0, 0, 4, 4],
            vec![0, 0, 8, 8],
            vec![0, 0, 0, 0],
            vec![0, 0, 16, 16],
        ]
    );
}

#[test]
fn test_tilt_left_mirrors_right() {
    let mut board = Board::from_rows(&[
        [2u32, 2, 2, 0],
        [0, 4, 4, 4],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
    ])
    .unwrap();
    let result = tilt(&mut board, Direction::Left);
    assert_eq!(result.score_delta, 12);
    assert_eq!(
        board.to_rows(),
        vec![
            vec![4, 2, 0, 0],
            vec![8, 4, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]
    );
}

#[test]
fn test_perspective_restored_after_every_tilt() {
    for dir in Direction::ALL {
        let mut board = column([2, 0, 2, 4]);
        tilt(&mut board, dir);
        assert_eq!(board.perspective(), Direction::Up, "after tilting {:?}", dir);
    }
}

#[test]
fn test_other_board_sizes() {
    let mut board = Board::from_rows(&[[2u32, 0], [2, 0]]).unwrap();
    let result = tilt(&mut board, Direction::Down);
    assert_eq!(result.score_delta, 4);
    assert_eq!(board.to_rows(), vec![vec![4, 0], vec![0, 0]]);

    let mut board = Board::from_rows(&[
        [2u32, 2, 2, 2, 2],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap();
    let result = tilt(&mut board, Direction::Left);
    assert_eq!(result.merges, 2);
    assert_eq!(board.to_rows()[0], vec![4, 4, 2, 0, 0]);
}

#[test]
fn test_largest_tiles_stay_powers_of_two() {
    let top = 1u32 << 31;
    let mut board = Board::from_rows(&[[top, top], [0, 0]]).unwrap();
    let before = board.value_sum();
    let result = tilt(&mut board, Direction::Left);
    assert!(!result.changed);
    assert_eq!(result.score_delta, 0);
    assert_eq!(board.value_sum(), before);
    assert!(board.cells().iter().flatten().all(|&v| Tile::is_valid_value(v)));

    // One step down the range still merges into the top value.
    let mut board = Board::from_rows(&[[1u32 << 30, 1 << 30], [0, 0]]).unwrap();
    let result = tilt(&mut board, Direction::Left);
    assert_eq!(result.score_delta, top);
    assert_eq!(board.to_rows(), vec![vec![top, 0], vec![0, 0]]);
}
