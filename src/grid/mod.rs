//! Grid storage and initial generation.
//!
//! - [`board`]: the N×N `Grid` with bounds-checked access and text rendering
//! - [`generator`]: match-free initial grids by rejection sampling

pub mod board;
pub mod generator;

pub use board::Grid;
pub use generator::{generate_grid, random_grid};
