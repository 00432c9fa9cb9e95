//! Removal, gravity, refill and the cascade loop.
//!
//! One pass:
//! 1. Every matched position becomes `Empty`.
//! 2. Per column, the bottom-most empty slot is closed by shifting every
//!    cell above it down by one and sampling a fresh tile into row 0. This
//!    repeats until the column has no empty slot, so several gaps in one
//!    column each pull the tiles above them down in order.
//! 3. Special-tile directives are written last, so gravity cannot move them
//!    and refill cannot overwrite them.
//!
//! The cascade repeats passes until detection finds nothing. Termination is
//! only probabilistic, so the loop is capped and surfaces `CascadeOverrun`
//! with the grid in its last fully resolved state.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Cell, EngineConfig, EngineError, EngineResult, Palette, Position, TileSource};
use crate::grid::Grid;
use crate::matching::{detect_matches, Detection};

/// What one remove/refill pass consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassSummary {
    /// Positions cleared in this pass.
    pub matched: usize,
    /// Special tiles written at the end of this pass.
    pub specials_created: usize,
}

/// Summary of a whole cascade, one entry per pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeReport {
    pub passes: Vec<PassSummary>,
    /// Sum of `matched` over all passes.
    pub total_matched: usize,
}

impl CascadeReport {
    /// Number of passes performed.
    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Special tiles created over all passes.
    #[must_use]
    pub fn specials_created(&self) -> usize {
        self.passes.iter().map(|p| p.specials_created).sum()
    }

    fn record(&mut self, pass: PassSummary) {
        self.total_matched += pass.matched;
        self.passes.push(pass);
    }
}

/// Applies detections to a grid.
///
/// Built from an `EngineConfig`; holds the palette used for refill and the
/// cascade pass cap.
#[derive(Clone, Debug)]
pub struct Resolver {
    palette: Palette,
    max_passes: u32,
}

impl Resolver {
    /// Create a resolver for a configuration.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            palette: config.palette.clone(),
            max_passes: config.max_cascade_passes,
        }
    }

    /// Run one remove/gravity/refill pass for `detection`.
    ///
    /// Every matched and anchor position is bounds-checked before the grid
    /// is touched.
    pub fn remove_and_refill(
        &self,
        grid: &mut Grid,
        detection: &Detection,
        source: &mut impl TileSource,
    ) -> EngineResult<PassSummary> {
        for pos in detection.matched.iter() {
            grid.check(pos)?;
        }
        for directive in &detection.directives {
            grid.check(directive.position)?;
        }

        for pos in detection.matched.iter() {
            grid[pos] = Cell::Empty;
        }

        for col in 0..grid.size() {
            self.settle_column(grid, col, source);
        }

        for directive in &detection.directives {
            grid[directive.position] = Cell::Special(directive.kind);
        }

        debug_assert!(!grid.has_empty(), "empty cell escaped refill");

        Ok(PassSummary {
            matched: detection.matched.len(),
            specials_created: detection.directives.len(),
        })
    }

    /// Resolve `detection` and every cascade it triggers.
    ///
    /// An empty detection performs no pass. After `Ok`, the grid holds no
    /// run and no empty cell.
    pub fn resolve_cascade(
        &self,
        grid: &mut Grid,
        detection: Detection,
        source: &mut impl TileSource,
    ) -> EngineResult<CascadeReport> {
        let mut report = CascadeReport::default();
        let mut current = detection;

        while !current.is_empty() {
            if report.pass_count() >= self.max_passes as usize {
                warn!(
                    "Cascade still matching after {} passes ({} cells cleared)",
                    self.max_passes, report.total_matched
                );
                return Err(EngineError::CascadeOverrun {
                    passes: self.max_passes,
                });
            }

            let pass = self.remove_and_refill(grid, &current, source)?;
            report.record(pass);
            debug!(
                "Cascade pass {}: cleared {}, specials {}",
                report.pass_count(),
                pass.matched,
                pass.specials_created
            );

            current = detect_matches(grid);
        }

        Ok(report)
    }

    /// Close every empty slot in one column, bottom-most first.
    fn settle_column(&self, grid: &mut Grid, col: usize, source: &mut impl TileSource) {
        while let Some(gap) = lowest_gap(grid, col) {
            for row in (1..=gap).rev() {
                grid[Position::new(row, col)] = grid[Position::new(row - 1, col)];
            }
            grid[Position::new(0, col)] = Cell::Basic(source.next_tile(&self.palette));
        }
    }
}

/// Row of the bottom-most empty cell in a column.
fn lowest_gap(grid: &Grid, col: usize) -> Option<usize> {
    (0..grid.size())
        .rev()
        .find(|&row| grid[Position::new(row, col)].is_empty())
}

/// Resolve a detection and all resulting cascades with a config's palette
/// and pass cap.
///
/// `report.total_matched` is the total number of cleared positions.
pub fn resolve_cascade(
    grid: &mut Grid,
    detection: Detection,
    config: &EngineConfig,
    source: &mut impl TileSource,
) -> EngineResult<CascadeReport> {
    Resolver::new(config).resolve_cascade(grid, detection, source)
}
