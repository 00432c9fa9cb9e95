//! Engine configuration.
//!
//! Callers configure a session by providing:
//! - `Palette`: the basic tile kinds and their display names
//! - `EngineConfig`: grid size, scoring constants, move budget, safety caps
//!
//! Nothing here is process-wide; independent sessions each carry their own
//! configuration value.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::tile::TileKind;

/// Largest palette addressable by a `u8` tile index.
pub const MAX_PALETTE_LEN: usize = 256;

/// Ordered set of basic tile kinds.
///
/// `TileKind(i)` refers to the `i`-th name. Holds between 1 and
/// [`MAX_PALETTE_LEN`] kinds; a session additionally needs at least 2, which
/// [`EngineConfig::validate`] enforces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    /// Create a palette from display names.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> EngineResult<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(EngineError::InvalidConfig("palette must not be empty".to_string()));
        }
        if names.len() > MAX_PALETTE_LEN {
            return Err(EngineError::InvalidConfig(format!(
                "palette has {} kinds, at most {} supported",
                names.len(),
                MAX_PALETTE_LEN
            )));
        }
        Ok(Self { names })
    }

    /// Number of tile kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Display name of a tile kind.
    #[must_use]
    pub fn name(&self, kind: TileKind) -> Option<&str> {
        self.names.get(kind.index()).map(String::as_str)
    }

    /// Iterate over every tile kind in palette order.
    pub fn kinds(&self) -> impl Iterator<Item = TileKind> {
        (0..self.names.len()).map(|i| TileKind(i as u8))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            names: ["red", "green", "blue", "yellow", "purple"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = EngineError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.names
    }
}

/// Complete engine configuration.
///
/// Missing fields fall back to the defaults when deserializing, so a
/// config file only needs to name what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length N of the N×N grid.
    pub grid_size: usize,

    /// Basic tile kinds.
    pub palette: Palette,

    /// Points per matched tile.
    pub match_score: u32,

    /// Extra points per special tile created. Zero unless opted into.
    pub special_bonus: u32,

    /// Score that wins the session.
    pub target_score: u32,

    /// Accepted swaps allowed before the session is lost.
    pub max_moves: u32,

    /// Full-grid samples tried before generation gives up.
    pub max_generation_attempts: u32,

    /// Remove/refill passes allowed per cascade.
    pub max_cascade_passes: u32,

    /// Seed for the session RNG.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            palette: Palette::default(),
            match_score: 10,
            special_bonus: 0,
            target_score: 1000,
            max_moves: 20,
            max_generation_attempts: 10_000,
            max_cascade_passes: 100,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON configuration and validate it.
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> EngineResult<()> {
        if self.grid_size < 3 {
            return Err(EngineError::InvalidConfig(format!(
                "grid_size must be at least 3, got {}",
                self.grid_size
            )));
        }
        if self.palette.len() < 2 {
            return Err(EngineError::InvalidConfig(
                "palette needs at least 2 tile kinds".to_string(),
            ));
        }
        if self.max_moves == 0 {
            return Err(EngineError::InvalidConfig("max_moves must be positive".to_string()));
        }
        if self.max_generation_attempts == 0 {
            return Err(EngineError::InvalidConfig(
                "max_generation_attempts must be positive".to_string(),
            ));
        }
        if self.max_cascade_passes == 0 {
            return Err(EngineError::InvalidConfig(
                "max_cascade_passes must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the per-tile reward.
    #[must_use]
    pub fn with_match_score(mut self, score: u32) -> Self {
        self.match_score = score;
        self
    }

    /// Set the per-special-tile bonus.
    #[must_use]
    pub fn with_special_bonus(mut self, bonus: u32) -> Self {
        self.special_bonus = bonus;
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    /// Set the move budget.
    #[must_use]
    pub fn with_max_moves(mut self, moves: u32) -> Self {
        self.max_moves = moves;
        self
    }

    /// Set the generation retry cap.
    #[must_use]
    pub fn with_max_generation_attempts(mut self, attempts: u32) -> Self {
        self.max_generation_attempts = attempts;
        self
    }

    /// Set the cascade pass cap.
    #[must_use]
    pub fn with_max_cascade_passes(mut self, passes: u32) -> Self {
        self.max_cascade_passes = passes;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
