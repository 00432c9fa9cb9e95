//! Core engine types: tiles, positions, configuration, RNG, errors.
//!
//! This module contains the building blocks shared by the grid, matching
//! and resolution stages. Sessions configure these via `EngineConfig`
//! rather than global state.

pub mod config;
pub mod error;
pub mod position;
pub mod rng;
pub mod tile;

pub use config::{EngineConfig, Palette, MAX_PALETTE_LEN};
pub use error::{EngineError, EngineResult};
pub use position::{adjacent, Position};
pub use rng::{CycleSource, GameRng, GameRngState, TileSource};
pub use tile::{Cell, SpecialKind, TileKind};
