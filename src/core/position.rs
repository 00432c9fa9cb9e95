//! Grid coordinates.

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate, 0-indexed.
///
/// Rows grow downward: row 0 is the top of the grid and gravity pulls
/// tiles toward the highest row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn distance(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Are the two positions orthogonal neighbours?
    ///
    /// ```
    /// use rust_match3::core::Position;
    ///
    /// assert!(Position::new(0, 0).is_adjacent(Position::new(0, 1)));
    /// assert!(!Position::new(0, 0).is_adjacent(Position::new(1, 1)));
    /// ```
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.distance(other) == 1
    }

    /// Is this position inside an N×N grid?
    #[must_use]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Right-hand neighbour, if inside an N×N grid.
    #[must_use]
    pub fn right(self, size: usize) -> Option<Position> {
        (self.col + 1 < size).then(|| Position::new(self.row, self.col + 1))
    }

    /// Neighbour below, if inside an N×N grid.
    #[must_use]
    pub fn below(self, size: usize) -> Option<Position> {
        (self.row + 1 < size).then(|| Position::new(self.row + 1, self.col))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Are `a` and `b` orthogonal neighbours (Manhattan distance exactly 1)?
#[must_use]
pub fn adjacent(a: Position, b: Position) -> bool {
    a.is_adjacent(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent() {
        let origin = Position::new(1, 1);
        assert!(adjacent(origin, Position::new(0, 1)));
        assert!(adjacent(origin, Position::new(2, 1)));
        assert!(adjacent(origin, Position::new(1, 0)));
        assert!(adjacent(origin, Position::new(1, 2)));

        assert!(!adjacent(origin, origin));
        assert!(!adjacent(origin, Position::new(2, 2)));
        assert!(!adjacent(Position::new(0, 0), Position::new(2, 2)));
        assert!(!adjacent(Position::new(0, 0), Position::new(0, 2)));
    }

    #[test]
    fn test_bounds() {
        assert!(Position::new(0, 0).in_bounds(1));
        assert!(Position::new(9, 9).in_bounds(10));
        assert!(!Position::new(10, 0).in_bounds(10));
        assert!(!Position::new(0, 10).in_bounds(10));
    }

    #[test]
    fn test_neighbours() {
        assert_eq!(Position::new(0, 0).right(3), Some(Position::new(0, 1)));
        assert_eq!(Position::new(0, 2).right(3), None);
        assert_eq!(Position::new(1, 0).below(3), Some(Position::new(2, 0)));
        assert_eq!(Position::new(2, 0).below(3), None);
    }

    #[test]
    fn test_display_and_from() {
        let pos: Position = (2, 5).into();
        assert_eq!(pos, Position::new(2, 5));
        assert_eq!(format!("{}", pos), "(2, 5)");
    }
}
