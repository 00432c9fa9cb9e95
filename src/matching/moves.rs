//! Legal move search.
//!
//! A move is an adjacent swap that leaves at least one run on the grid.
//! Candidates are tried on a scratch copy so the caller's grid is never
//! touched.

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::grid::Grid;

use super::detector::has_match;

/// A swap of two orthogonally adjacent positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swap {
    pub first: Position,
    pub second: Position,
}

impl Swap {
    /// Create a new swap.
    #[must_use]
    pub const fn new(first: Position, second: Position) -> Self {
        Self { first, second }
    }
}

impl std::fmt::Display for Swap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}

/// Every adjacent swap that would produce a run, in row-major order of the
/// first position (right neighbour before the one below).
///
/// Swaps of two equal cells are skipped since they cannot change the grid.
#[must_use]
pub fn available_moves(grid: &Grid) -> Vec<Swap> {
    let mut moves = Vec::new();
    for_each_productive_swap(grid, |swap| {
        moves.push(swap);
        true
    });
    moves
}

/// First productive swap, if any.
#[must_use]
pub fn first_available_move(grid: &Grid) -> Option<Swap> {
    let mut found = None;
    for_each_productive_swap(grid, |swap| {
        found = Some(swap);
        false
    });
    found
}

/// Does the grid admit any productive swap?
#[must_use]
pub fn has_available_move(grid: &Grid) -> bool {
    first_available_move(grid).is_some()
}

/// Calls `visit` for each productive swap until it returns false.
fn for_each_productive_swap(grid: &Grid, mut visit: impl FnMut(Swap) -> bool) {
    let size = grid.size();
    let mut scratch = grid.clone();

    for pos in grid.positions() {
        for neighbour in [pos.right(size), pos.below(size)].into_iter().flatten() {
            if grid[pos] == grid[neighbour] {
                continue;
            }

            exchange(&mut scratch, pos, neighbour);
            let productive = has_match(&scratch);
            exchange(&mut scratch, pos, neighbour);

            if productive && !visit(Swap::new(pos, neighbour)) {
                return;
            }
        }
    }
}

fn exchange(grid: &mut Grid, a: Position, b: Position) {
    let cell = grid[a];
    grid[a] = grid[b];
    grid[b] = cell;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_single_move() {
        // Swapping (0, 2) and (1, 2) completes "aaa" in row 0.
        let grid = Grid::parse(
            "aab
             cda
             dcb",
        )
        .unwrap();
        let moves = available_moves(&grid);

        assert_eq!(moves, vec![Swap::new(Position::new(0, 2), Position::new(1, 2))]);
        assert_eq!(first_available_move(&grid), Some(moves[0]));
        assert!(has_available_move(&grid));
    }

    #[test]
    fn test_no_moves_on_dead_board() {
        let grid = Grid::parse(
            "abc
             def
             ghi",
        )
        .unwrap();
        assert!(available_moves(&grid).is_empty());
        assert!(!has_available_move(&grid));
    }

    #[test]
    fn test_search_leaves_grid_untouched() {
        let grid = Grid::parse(
            "aab
             cda
             dcb",
        )
        .unwrap();
        let before = grid.clone();
        let _ = available_moves(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_swap_display() {
        let swap = Swap::new(Position::new(0, 1), Position::new(1, 1));
        assert_eq!(swap.to_string(), "(0, 1) <-> (1, 1)");
    }
}
