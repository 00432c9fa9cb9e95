//! The N×N tile grid.
//!
//! Cells are stored row-major in a flat `Vec<Cell>`. Row 0 is the top;
//! gravity pulls toward row `size - 1`.
//!
//! Fallible accessors (`get`, `set`, `swap`) reject out-of-range positions
//! before touching any cell. Indexing with `grid[pos]` panics instead and is
//! meant for positions already known to be in bounds.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::core::{Cell, EngineError, EngineResult, Position, SpecialKind, TileKind};

/// Square grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid by calling `f` for every position in row-major order.
    pub fn from_fn(size: usize, mut f: impl FnMut(Position) -> Cell) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(Position::new(row, col)));
            }
        }
        Self { size, cells }
    }

    /// Build a grid from explicit rows.
    ///
    /// Rejects empty or non-square input and any `Empty` cell.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> EngineResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(EngineError::InvalidConfig("grid must have at least one row".to_string()));
        }
        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(EngineError::InvalidConfig(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            if row.iter().any(|c| c.is_empty()) {
                return Err(EngineError::InvalidConfig(format!("row {} contains an empty cell", i)));
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    /// Parse a grid from its text rendering.
    ///
    /// One line per row, one glyph per cell: `a`..`z` for basic tiles by
    /// palette index, `-` for row-clearing and `|` for column-clearing
    /// specials. Surrounding whitespace and blank lines are ignored.
    ///
    /// ```
    /// use rust_match3::grid::Grid;
    ///
    /// let grid = Grid::parse("abc\nbca\ncab").unwrap();
    /// assert_eq!(grid.size(), 3);
    /// assert_eq!(grid.to_string(), "abc\nbca\ncab");
    /// ```
    pub fn parse(text: &str) -> EngineResult<Self> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(parse_glyph).collect::<EngineResult<Vec<_>>>())
            .collect::<EngineResult<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    /// Side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Does the grid contain this position?
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.size)
    }

    /// Fail with `InvalidPosition` unless `pos` is inside the grid.
    pub fn check(&self, pos: Position) -> EngineResult<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(EngineError::InvalidPosition {
                position: pos,
                size: self.size,
            })
        }
    }

    /// Get the cell at a position.
    pub fn get(&self, pos: Position) -> EngineResult<Cell> {
        self.check(pos)?;
        Ok(self[pos])
    }

    /// Overwrite the cell at a position.
    pub fn set(&mut self, pos: Position, cell: Cell) -> EngineResult<()> {
        self.check(pos)?;
        self[pos] = cell;
        Ok(())
    }

    /// Exchange two cells. Both positions are checked before either moves.
    pub fn swap(&mut self, a: Position, b: Position) -> EngineResult<()> {
        self.check(a)?;
        self.check(b)?;
        let (ia, ib) = (self.offset(a), self.offset(b));
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Cells of one row, left to right.
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).map(move |row| self[Position::new(row, col)])
    }

    /// Iterate over all rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size * size).map(move |i| Position::new(i / size, i % size))
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Does any cell hold the transient `Empty` marker?
    #[must_use]
    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|c| c.is_empty())
    }

    /// Number of special tiles on the grid.
    #[must_use]
    pub fn special_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_special()).count()
    }

    /// Number of cells holding a given basic kind.
    #[must_use]
    pub fn count_kind(&self, kind: TileKind) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Basic(kind)).count()
    }

    fn offset(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }
}

fn parse_glyph(glyph: char) -> EngineResult<Cell> {
    match glyph {
        'a'..='z' => Ok(Cell::Basic(TileKind(glyph as u8 - b'a'))),
        '-' => Ok(Cell::Special(SpecialKind::RowClearing)),
        '|' => Ok(Cell::Special(SpecialKind::ColumnClearing)),
        other => Err(EngineError::InvalidConfig(format!("unknown cell glyph '{}'", other))),
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(self.contains(pos), "{} outside {}x{} grid", pos, self.size, self.size);
        &self.cells[self.offset(pos)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        assert!(self.contains(pos), "{} outside {}x{} grid", pos, self.size, self.size);
        let offset = self.offset(pos);
        &mut self.cells[offset]
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}
