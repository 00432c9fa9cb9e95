//! Engine error types.
//!
//! Failed swaps are not errors: `validate_swap` returns `Ok(false)` for a
//! legal-but-unproductive swap. Errors cover malformed input and the
//! configured safety caps.

use derive_more::{Display, Error};

use super::position::Position;

/// Errors surfaced by the grid engine.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A position lies outside the grid. Rejected before any mutation.
    #[display("Position {position} is outside the {size}x{size} grid")]
    InvalidPosition { position: Position, size: usize },

    /// Two positions that are not orthogonal neighbours were offered as a swap.
    #[display("Positions {first} and {second} are not adjacent")]
    InvalidMove { first: Position, second: Position },

    /// No match-free grid was found within the configured attempts.
    #[display("No match-free grid found after {attempts} attempts")]
    GenerationFailed { attempts: u32 },

    /// The cascade loop exceeded the configured pass cap.
    ///
    /// The grid is left in its last resolved state (no empty cells).
    #[display("Cascade did not settle within {passes} passes")]
    CascadeOverrun { passes: u32 },

    /// A move was attempted after the session ended.
    #[display("Session is over")]
    GameOver,

    /// Configuration failed validation or could not be parsed.
    #[display("Invalid configuration: {_0}")]
    InvalidConfig(#[error(not(source))] String),
}

/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;
