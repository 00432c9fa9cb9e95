//! Initial grid generation.
//!
//! Rejection sampling: fill the whole grid with independently drawn basic
//! tiles, run the detector, and retry until nothing matches. Detection is
//! O(N²), and for palettes of four or more kinds at N≈10 a match-free grid
//! turns up within a handful of attempts.

use log::{debug, warn};

use crate::core::{Cell, EngineConfig, EngineError, EngineResult, Palette, TileSource};
use crate::matching::detect_matches;

use super::Grid;

/// Fill an N×N grid with independently sampled basic tiles.
///
/// The result may contain matches; see [`generate_grid`] for the
/// match-free variant.
pub fn random_grid(size: usize, palette: &Palette, source: &mut impl TileSource) -> Grid {
    Grid::from_fn(size, |_| Cell::Basic(source.next_tile(palette)))
}

/// Produce a match-free grid for the configured size and palette.
///
/// Fails with `InvalidConfig` for a config that does not validate, and
/// with `GenerationFailed` once `config.max_generation_attempts`
/// samples have all contained a run.
pub fn generate_grid(config: &EngineConfig, source: &mut impl TileSource) -> EngineResult<Grid> {
    config.validate()?;
    for attempt in 1..=config.max_generation_attempts {
        let grid = random_grid(config.grid_size, &config.palette, source);
        if detect_matches(&grid).is_empty() {
            debug!(
                "Generated {}x{} grid after {} attempt(s)",
                config.grid_size, config.grid_size, attempt
            );
            return Ok(grid);
        }
    }

    warn!(
        "No match-free {}x{} grid with {} kinds after {} attempts",
        config.grid_size,
        config.grid_size,
        config.palette.len(),
        config.max_generation_attempts
    );
    Err(EngineError::GenerationFailed {
        attempts: config.max_generation_attempts,
    })
}
