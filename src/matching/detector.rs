//! Run detection.
//!
//! Each axis is scanned independently with a sliding three-cell window:
//!
//! - Every window of three equal cells adds its positions to the match set.
//! - If the cell after the window also matches, it is added too and a
//!   special-tile directive is anchored at the window's second cell
//!   (row-clearing for rows, column-clearing for columns).
//!
//! A run of five or more therefore yields one directive per four-cell
//! window as the scan slides along it. Positions claimed by both a
//! horizontal and a vertical run are stored once.

use log::trace;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{Position, SpecialKind};
use crate::grid::Grid;

/// Positions captured by one detection pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    positions: FxHashSet<Position>,
}

impl MatchSet {
    /// Create an empty match set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a position. Returns false if it was already present.
    pub fn insert(&mut self, pos: Position) -> bool {
        self.positions.insert(pos)
    }

    /// Is the position part of a run?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Number of distinct matched positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// No runs were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    /// Positions in row-major order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Position> {
        let mut positions: Vec<_> = self.iter().collect();
        positions.sort_unstable();
        positions
    }
}

impl FromIterator<Position> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Position> for MatchSet {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        self.positions.extend(iter);
    }
}

/// A special tile to write once removal and refill are done.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpecialDirective {
    /// Anchor: the second cell of the four-cell window.
    pub position: Position,
    pub kind: SpecialKind,
}

impl SpecialDirective {
    /// Create a new directive.
    #[must_use]
    pub const fn new(position: Position, kind: SpecialKind) -> Self {
        Self { position, kind }
    }
}

/// Directive list; runs of four are rare, so a few slots live inline.
pub type Directives = SmallVec<[SpecialDirective; 4]>;

/// Output of one detection pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Detection {
    pub matched: MatchSet,
    /// In scan order: all horizontal directives, then all vertical ones.
    pub directives: Directives,
}

impl Detection {
    /// No runs were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    /// Number of matched positions.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matched.len()
    }
}

/// Scan the grid for runs of three or more along rows and columns.
///
/// Pure read of the grid; O(N²).
#[must_use]
pub fn detect_matches(grid: &Grid) -> Detection {
    let mut detection = Detection::default();
    scan(grid, Axis::Horizontal, &mut detection);
    scan(grid, Axis::Vertical, &mut detection);

    if !detection.is_empty() {
        trace!(
            "Detected {} matched cell(s), {} special directive(s)",
            detection.matched.len(),
            detection.directives.len()
        );
    }
    detection
}

/// Does the grid contain at least one run of three?
///
/// Same rule as [`detect_matches`] but stops at the first run.
#[must_use]
pub fn has_match(grid: &Grid) -> bool {
    [Axis::Horizontal, Axis::Vertical].into_iter().any(|axis| {
        let n = grid.size();
        (0..n).any(|line| {
            (0..n.saturating_sub(2)).any(|start| {
                let first = grid[axis.position(line, start)];
                first.matches(grid[axis.position(line, start + 1)])
                    && first.matches(grid[axis.position(line, start + 2)])
            })
        })
    })
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Position of the `offset`-th cell along `line`.
    fn position(self, line: usize, offset: usize) -> Position {
        match self {
            Axis::Horizontal => Position::new(line, offset),
            Axis::Vertical => Position::new(offset, line),
        }
    }

    fn special(self) -> SpecialKind {
        match self {
            Axis::Horizontal => SpecialKind::RowClearing,
            Axis::Vertical => SpecialKind::ColumnClearing,
        }
    }
}

fn scan(grid: &Grid, axis: Axis, out: &mut Detection) {
    let n = grid.size();
    for line in 0..n {
        for start in 0..n.saturating_sub(2) {
            let at = |offset: usize| axis.position(line, start + offset);
            let first = grid[at(0)];
            if !(first.matches(grid[at(1)]) && first.matches(grid[at(2)])) {
                continue;
            }

            out.matched.extend([at(0), at(1), at(2)]);

            if start + 3 < n && first.matches(grid[at(3)]) {
                out.matched.insert(at(3));
                out.directives.push(SpecialDirective::new(at(1), axis.special()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn positions(list: &[(usize, usize)]) -> Vec<Position> {
        let mut out: Vec<_> = list.iter().map(|&p| Position::from(p)).collect();
        out.sort_unstable();
        out
    }

    #[test]
    fn test_no_matches() {
        let grid = Grid::parse("abc\nbca\ncab").unwrap();
        let detection = detect_matches(&grid);
        assert!(detection.is_empty());
        assert!(detection.directives.is_empty());
        assert!(!has_match(&grid));
    }

    #[test]
    fn test_run_of_three_in_row() {
        let grid = Grid::parse(
            "aaab
             bcdc
             cdbd
             dbca",
        )
        .unwrap();
        let detection = detect_matches(&grid);

        assert_eq!(detection.matched.sorted(), positions(&[(0, 0), (0, 1), (0, 2)]));
        assert!(detection.directives.is_empty());
        assert!(has_match(&grid));
    }

    #[test]
    fn test_run_of_four_in_row() {
        let grid = Grid::parse(
            "aaaab
             bcdbc
             cdbcd
             dbcdb
             bcdbc",
        )
        .unwrap();
        let detection = detect_matches(&grid);

        assert_eq!(
            detection.matched.sorted(),
            positions(&[(0, 0), (0, 1), (0, 2), (0, 3)])
        );
        assert_eq!(
            detection.directives.as_slice(),
            &[SpecialDirective::new(Position::new(0, 1), SpecialKind::RowClearing)]
        );
    }

    #[test]
    fn test_run_of_five_yields_two_directives() {
        let grid = Grid::parse(
            "aaaaa
             bcdbc
             cdbcd
             dbcdb
             bcdbc",
        )
        .unwrap();
        let detection = detect_matches(&grid);

        assert_eq!(detection.match_count(), 5);
        assert_eq!(
            detection.directives.as_slice(),
            &[
                SpecialDirective::new(Position::new(0, 1), SpecialKind::RowClearing),
                SpecialDirective::new(Position::new(0, 2), SpecialKind::RowClearing),
            ]
        );
    }

    #[test]
    fn test_run_of_four_in_column() {
        let grid = Grid::parse(
            "bcdb
             acbd
             adcb
             acbd",
        )
        .unwrap();
        // Column 0 rows 1..=3 is a run of three only.
        let detection = detect_matches(&grid);
        assert_eq!(detection.matched.sorted(), positions(&[(1, 0), (2, 0), (3, 0)]));
        assert!(detection.directives.is_empty());

        let grid = Grid::parse(
            "acdb
             adbc
             acdb
             adbc",
        )
        .unwrap();
        let detection = detect_matches(&grid);
        assert_eq!(
            detection.matched.sorted(),
            positions(&[(0, 0), (1, 0), (2, 0), (3, 0)])
        );
        assert_eq!(
            detection.directives.as_slice(),
            &[SpecialDirective::new(Position::new(1, 0), SpecialKind::ColumnClearing)]
        );
    }

    #[test]
    fn test_crossing_runs_share_a_position() {
        // Row 1 and column 1 both run through (1, 1).
        let grid = Grid::parse(
            "bac
             aaa
             cab",
        )
        .unwrap();
        let detection = detect_matches(&grid);

        assert_eq!(detection.match_count(), 5);
        assert_eq!(
            detection.matched.sorted(),
            positions(&[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)])
        );
    }

    #[test]
    fn test_horizontal_directives_precede_vertical() {
        let grid = Grid::parse(
            "aaaab
             bcdbb
             cdbcb
             dbcdb
             bcdbc",
        )
        .unwrap();
        let detection = detect_matches(&grid);

        assert_eq!(
            detection.directives.as_slice(),
            &[
                SpecialDirective::new(Position::new(0, 1), SpecialKind::RowClearing),
                SpecialDirective::new(Position::new(1, 4), SpecialKind::ColumnClearing),
            ]
        );
    }

    #[test]
    fn test_special_tiles_match_each_other() {
        let grid = Grid::parse(
            "---
             abc
             bca",
        )
        .unwrap();
        let detection = detect_matches(&grid);
        assert_eq!(detection.matched.sorted(), positions(&[(0, 0), (0, 1), (0, 2)]));
    }

    #[test]
    fn test_empty_cells_never_match() {
        let mut grid = Grid::parse("abc\nbca\ncab").unwrap();
        for col in 0..3 {
            grid[Position::new(0, col)] = Cell::Empty;
        }
        assert!(detect_matches(&grid).is_empty());
        assert!(!has_match(&grid));
    }

    #[test]
    fn test_detection_is_idempotent() {
        let grid = Grid::parse(
            "aaaab
             bcdbb
             cdbcb
             dbcdb
             bcdbc",
        )
        .unwrap();
        assert_eq!(detect_matches(&grid), detect_matches(&grid));
    }

    #[test]
    fn test_match_set_collects() {
        let set: MatchSet = [Position::new(1, 1), Position::new(0, 2), Position::new(1, 1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Position::new(0, 2)));
        assert_eq!(set.sorted(), vec![Position::new(0, 2), Position::new(1, 1)]);
    }
}
