//! Match detection and move search.
//!
//! - [`detector`]: runs of three or more, special-tile directives for runs of four
//! - [`moves`]: adjacent swaps that would produce a run

pub mod detector;
pub mod moves;

pub use detector::{detect_matches, has_match, Detection, Directives, MatchSet, SpecialDirective};
pub use moves::{available_moves, first_available_move, has_available_move, Swap};
