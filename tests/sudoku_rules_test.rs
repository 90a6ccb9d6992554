//! Tests for the sudoku rule checker.

use puzzle_portal::{
    Grid, is_complete, is_correct, is_valid_placement, sample_puzzle, sample_solution,
};

#[test]
fn test_empty_grid_accepts_any_digit() {
    let grid = Grid::empty();
    for digit in 1..=9 {
        assert!(
            is_valid_placement(&grid, 4, 4, digit),
            "Digit {} should be valid on an empty grid",
            digit
        );
    }
}

#[test]
fn test_row_conflict_rejected() {
    let mut grid = Grid::empty();
    grid.set(0, 0, 5).expect("Cell in bounds");
    assert!(!is_valid_placement(&grid, 0, 8, 5), "Same digit in row");
    assert!(is_valid_placement(&grid, 0, 8, 6), "Different digit is fine");
}

#[test]
fn test_column_conflict_rejected() {
    let mut grid = Grid::empty();
    grid.set(0, 3, 7).expect("Cell in bounds");
    assert!(!is_valid_placement(&grid, 8, 3, 7), "Same digit in column");
    assert!(is_valid_placement(&grid, 8, 3, 2), "Different digit is fine");
}

#[test]
fn test_box_conflict_rejected() {
    let mut grid = Grid::empty();
    grid.set(0, 0, 9).expect("Cell in bounds");
    // (2, 2) shares the top-left box but neither row nor column.
    assert!(!is_valid_placement(&grid, 2, 2, 9), "Same digit in box");
    assert!(is_valid_placement(&grid, 2, 2, 1), "Different digit is fine");
}

#[test]
fn test_own_cell_excluded_from_scan() {
    let mut grid = Grid::empty();
    grid.set(4, 4, 5).expect("Cell in bounds");
    assert!(
        is_valid_placement(&grid, 4, 4, 5),
        "A cell must not conflict with its own current value"
    );
}

#[test]
fn test_out_of_bounds_rejected() {
    let grid = Grid::empty();
    assert!(!is_valid_placement(&grid, 9, 0, 1));
    assert!(!is_valid_placement(&grid, 0, 9, 1));
}

#[test]
fn test_out_of_range_digit_rejected() {
    let grid = Grid::empty();
    assert!(!is_valid_placement(&grid, 0, 0, 0));
    assert!(!is_valid_placement(&grid, 0, 0, 10));
}

#[test]
fn test_builtin_puzzle_is_incomplete() {
    let puzzle = sample_puzzle();
    assert!(!is_complete(&puzzle), "Puzzle has empty cells");
    assert!(!is_correct(&puzzle), "Incomplete grids are never correct");
}

#[test]
fn test_builtin_solution_is_complete_and_correct() {
    let solution = sample_solution();
    assert!(is_complete(&solution));
    assert!(is_correct(&solution));
}

#[test]
fn test_solution_solves_its_puzzle() {
    let puzzle = sample_puzzle();
    let solution = sample_solution();
    for row in 0..9 {
        for col in 0..9 {
            if !puzzle.is_empty_at(row, col) {
                assert_eq!(
                    puzzle.get(row, col),
                    solution.get(row, col),
                    "Solution must preserve the given at ({}, {})",
                    row,
                    col
                );
            }
        }
    }
}

#[test]
fn test_all_same_digit_complete_but_incorrect() {
    let grid = Grid::from_rows([[7; 9]; 9]);
    assert!(is_complete(&grid), "Every cell is filled");
    assert!(!is_correct(&grid), "Repeated digits violate every group");
}

#[test]
fn test_swapped_pair_breaks_correctness() {
    let solution = sample_solution();
    let mut broken = solution;
    let a = solution.get(0, 0).expect("Cell in bounds");
    let b = solution.get(0, 1).expect("Cell in bounds");
    broken.set(0, 0, b).expect("Cell in bounds");
    broken.set(0, 1, a).expect("Cell in bounds");

    assert!(is_complete(&broken));
    assert!(!is_correct(&broken), "Swap duplicates digits in columns");
}

#[test]
fn test_one_cleared_cell_is_incomplete() {
    let mut grid = sample_solution();
    grid.set(8, 8, 0).expect("Cell in bounds");
    assert!(!is_complete(&grid));
    assert!(!is_correct(&grid));
}
