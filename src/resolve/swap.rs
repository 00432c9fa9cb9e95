//! Swap validation.
//!
//! Commit/rollback protocol: exchange the two cells, ask the detector
//! whether a run now exists, and either keep the swap or exchange the cells
//! back. The caller observes the grid fully swapped or fully unswapped.

use log::trace;

use crate::core::{EngineError, EngineResult, Position};
use crate::grid::Grid;
use crate::matching::has_match;

/// Try swapping `a` and `b`, keeping the swap only if it produces a run.
///
/// Returns `Ok(true)` with the grid left swapped, or `Ok(false)` with the
/// grid restored exactly. Out-of-range positions fail with
/// `InvalidPosition` and non-adjacent ones with `InvalidMove`, both before
/// anything is mutated.
pub fn validate_swap(grid: &mut Grid, a: Position, b: Position) -> EngineResult<bool> {
    grid.check(a)?;
    grid.check(b)?;
    if !a.is_adjacent(b) {
        return Err(EngineError::InvalidMove { first: a, second: b });
    }

    grid.swap(a, b)?;
    if has_match(grid) {
        trace!("Swap {} <-> {} accepted", a, b);
        return Ok(true);
    }

    grid.swap(a, b)?;
    trace!("Swap {} <-> {} rejected", a, b);
    Ok(false)
}
