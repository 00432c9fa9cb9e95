//! Play sessions: scoring, move budget and win/lose.
//!
//! - [`game`]: `Session`, which drives swap validation and cascades
//! - [`scoring`]: per-tile reward, optional special bonus, win/lose evaluation

pub mod game;
pub mod scoring;

pub use game::{MoveOutcome, Session};
pub use scoring::{GameOutcome, Scoring};
