//! Applying moves and matches to a grid.
//!
//! - [`swap`]: commit/rollback swap validation
//! - [`cascade`]: removal, gravity, refill and the cascade loop

pub mod cascade;
pub mod swap;

pub use cascade::{resolve_cascade, CascadeReport, PassSummary, Resolver};
pub use swap::validate_swap;
