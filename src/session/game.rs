//! A single play session.
//!
//! Owns the grid and drives the engine the way a front end would: validate
//! a swap, resolve the cascade it triggers, score it, spend a move, and
//! check for a win or loss. Presentation (drawing, sound, input mapping)
//! stays with the caller.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, EngineError, EngineResult, GameRng, GameRngState, Position, TileSource};
use crate::grid::{generate_grid, Grid};
use crate::matching::{available_moves, detect_matches, first_available_move, Swap};
use crate::resolve::{validate_swap, CascadeReport, Resolver};

use super::scoring::{GameOutcome, Scoring};

/// Result of one swap attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The swap produced a run and was kept.
    pub accepted: bool,
    /// Cascade summary; empty for rejected swaps.
    pub report: CascadeReport,
    /// Points added to the session score.
    pub points: u32,
    /// Session state after the move.
    pub outcome: GameOutcome,
}

/// A play session: configuration, grid, tile source, score and move budget.
///
/// Rejected swaps leave the grid unchanged and do not spend a move.
#[derive(Clone, Debug)]
pub struct Session<S: TileSource = GameRng> {
    config: EngineConfig,
    resolver: Resolver,
    scoring: Scoring,
    grid: Grid,
    source: S,
    score: u32,
    moves_remaining: u32,
    moves_made: u32,
    outcome: GameOutcome,
}

impl Session<GameRng> {
    /// Start a session seeded from `config.seed` with a freshly generated grid.
    ///
    /// The grid is drawn from a dedicated "generate" stream so the number
    /// of generation attempts does not shift later refills.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        let grid = generate_grid(&config, &mut rng.for_context("generate"))?;
        info!(
            "Session started: {}x{} grid, {} kinds, seed {}",
            config.grid_size,
            config.grid_size,
            config.palette.len(),
            config.seed
        );
        Self::with_source(config, grid, rng)
    }

    /// Refill RNG state, for reproducing the rest of a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.source.state()
    }
}

impl<S: TileSource> Session<S> {
    /// Start a session on a caller-supplied grid and tile source.
    ///
    /// The grid must match `config.grid_size`; it is not required to be
    /// match-free.
    pub fn with_source(config: EngineConfig, grid: Grid, source: S) -> EngineResult<Self> {
        config.validate()?;
        if grid.size() != config.grid_size {
            return Err(EngineError::InvalidConfig(format!(
                "grid is {}x{}, config expects {}x{}",
                grid.size(),
                grid.size(),
                config.grid_size,
                config.grid_size
            )));
        }

        Ok(Self {
            resolver: Resolver::new(&config),
            scoring: Scoring::from_config(&config),
            moves_remaining: config.max_moves,
            config,
            grid,
            source,
            score: 0,
            moves_made: 0,
            outcome: GameOutcome::InProgress,
        })
    }

    /// Attempt to swap two adjacent positions.
    ///
    /// A productive swap is resolved through every cascade it triggers,
    /// scored, and charged one move. An unproductive swap returns
    /// `accepted: false` with the grid restored.
    pub fn try_swap(&mut self, a: Position, b: Position) -> EngineResult<MoveOutcome> {
        if self.outcome.is_over() {
            return Err(EngineError::GameOver);
        }

        if !validate_swap(&mut self.grid, a, b)? {
            return Ok(MoveOutcome {
                accepted: false,
                outcome: self.outcome,
                ..MoveOutcome::default()
            });
        }

        let detection = detect_matches(&self.grid);
        let report = self
            .resolver
            .resolve_cascade(&mut self.grid, detection, &mut self.source)?;
        let points = self.scoring.points_for(&report);

        self.score = self.score.saturating_add(points);
        self.moves_remaining = self.moves_remaining.saturating_sub(1);
        self.moves_made += 1;
        self.outcome = self.scoring.outcome(self.score, self.moves_remaining);

        debug!(
            "Move {}: {} <-> {} cleared {} in {} pass(es), +{} points",
            self.moves_made,
            a,
            b,
            report.total_matched,
            report.pass_count(),
            points
        );
        if self.outcome.is_over() {
            info!(
                "Session {} with score {} after {} moves",
                self.outcome, self.score, self.moves_made
            );
        }

        Ok(MoveOutcome {
            accepted: true,
            report,
            points,
            outcome: self.outcome,
        })
    }

    /// Apply a [`Swap`].
    pub fn play(&mut self, swap: Swap) -> EngineResult<MoveOutcome> {
        self.try_swap(swap.first, swap.second)
    }

    /// First productive swap on the current grid, if any.
    #[must_use]
    pub fn hint(&self) -> Option<Swap> {
        first_available_move(&self.grid)
    }

    /// Every productive swap on the current grid.
    #[must_use]
    pub fn available_moves(&self) -> Vec<Swap> {
        available_moves(&self.grid)
    }

    /// Current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Accumulated score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Moves left in the budget.
    #[must_use]
    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    /// Accepted swaps so far.
    #[must_use]
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Current win/lose state.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Scoring constants in effect.
    #[must_use]
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }
}
