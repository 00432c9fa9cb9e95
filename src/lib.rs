//! # rust-match3
//!
//! A deterministic match-3 grid engine.
//!
//! ## Design Principles
//!
//! 1. **Pure data**: Generation, detection and resolution are in-memory
//!    transformations of a `Grid`. Drawing, sound and input belong to the
//!    caller.
//!
//! 2. **Configuration Over Globals**: Grid size, palette, scoring constants
//!    and safety caps travel in an `EngineConfig` value, so independent
//!    sessions can coexist.
//!
//! 3. **Injectable Randomness**: Every new tile is drawn through the
//!    `TileSource` trait. `GameRng` (seeded ChaCha8) makes whole sessions
//!    reproducible; tests can script exact refill sequences.
//!
//! ## Pipeline
//!
//! - `generate_grid`: match-free starting grid (rejection sampling)
//! - `validate_swap`: trial swap, kept only if it produces a run
//! - `detect_matches`: runs of three or more, special directives for runs of four
//! - `resolve_cascade`: remove, apply gravity, refill, repeat until stable
//!
//! ## Example
//!
//! ```
//! use rust_match3::{EngineConfig, Session};
//!
//! let mut session = Session::new(EngineConfig::default().with_seed(7)).unwrap();
//! if let Some(swap) = session.hint() {
//!     let outcome = session.play(swap).unwrap();
//!     assert!(outcome.accepted);
//!     assert_eq!(session.moves_remaining(), 19);
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: Tiles, positions, configuration, RNG, errors
//! - `grid`: Grid storage and initial generation
//! - `matching`: Run detection and move search
//! - `resolve`: Swap validation and the cascade loop
//! - `session`: Scoring, move budget, win/lose

pub mod core;
pub mod grid;
pub mod matching;
pub mod resolve;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    adjacent, Cell, CycleSource, EngineConfig, EngineError, EngineResult, GameRng, GameRngState,
    Palette, Position, SpecialKind, TileKind, TileSource,
};

pub use crate::grid::{generate_grid, random_grid, Grid};

pub use crate::matching::{
    available_moves, detect_matches, has_available_move, has_match, Detection, MatchSet,
    SpecialDirective, Swap,
};

pub use crate::resolve::{resolve_cascade, validate_swap, CascadeReport, PassSummary, Resolver};

pub use crate::session::{GameOutcome, MoveOutcome, Scoring, Session};
