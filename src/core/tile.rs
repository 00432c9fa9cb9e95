//! Tile and cell values.
//!
//! ## TileKind
//!
//! A basic tile is an index into the configured [`Palette`](super::Palette).
//! The engine never interprets the index beyond equality.
//!
//! ## Cell
//!
//! Every grid slot holds exactly one `Cell`:
//! - `Basic`: an ordinary palette tile
//! - `Special`: a row- or column-clearing tile created by a run of four
//! - `Empty`: transient marker used while the resolver removes tiles

use serde::{Deserialize, Serialize};

/// Basic tile kind (palette index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileKind(pub u8);

impl TileKind {
    /// Create a new tile kind.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the palette index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Sub-kind of a special tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialKind {
    /// Created by a horizontal run of four; clears its row when activated.
    RowClearing,
    /// Created by a vertical run of four; clears its column when activated.
    ColumnClearing,
}

impl std::fmt::Display for SpecialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecialKind::RowClearing => write!(f, "row-clearing"),
            SpecialKind::ColumnClearing => write!(f, "column-clearing"),
        }
    }
}

/// Value held by a single grid slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Ordinary palette tile.
    Basic(TileKind),
    /// Special tile.
    Special(SpecialKind),
    /// Cleared slot awaiting gravity and refill.
    ///
    /// Only exists inside the resolver; grids handed back to callers never
    /// contain it.
    Empty,
}

impl Cell {
    /// Shorthand for a basic tile cell.
    #[must_use]
    pub const fn basic(index: u8) -> Self {
        Cell::Basic(TileKind(index))
    }

    /// Is this the transient empty marker?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Is this a special tile?
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self, Cell::Special(_))
    }

    /// Can this cell form a run with `other`?
    ///
    /// Equal non-empty values match. Empty slots never match, not even
    /// each other.
    #[must_use]
    pub fn matches(self, other: Cell) -> bool {
        !self.is_empty() && self == other
    }

    /// Single-character glyph for text rendering.
    ///
    /// Basic tiles render as `a`, `b`, ... by palette index.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Cell::Basic(kind) if kind.0 < 26 => (b'a' + kind.0) as char,
            Cell::Basic(_) => '?',
            Cell::Special(SpecialKind::RowClearing) => '-',
            Cell::Special(SpecialKind::ColumnClearing) => '|',
            Cell::Empty => '.',
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
