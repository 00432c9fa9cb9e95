//! Scoring and win/lose evaluation.

use serde::{Deserialize, Serialize};

use crate::core::EngineConfig;
use crate::resolve::{CascadeReport, PassSummary};

/// Where a session stands after a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    InProgress,
    /// Score reached the target.
    Won,
    /// Move budget ran out below the target.
    Lost,
}

impl GameOutcome {
    /// Has the session ended?
    #[must_use]
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::Won => write!(f, "won"),
            GameOutcome::Lost => write!(f, "lost"),
        }
    }
}

/// Scoring constants taken from the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    /// Points per cleared tile.
    pub match_score: u32,
    /// Points per special tile created.
    pub special_bonus: u32,
    /// Score that wins.
    pub target_score: u32,
}

impl Scoring {
    /// Extract the scoring constants from a configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            match_score: config.match_score,
            special_bonus: config.special_bonus,
            target_score: config.target_score,
        }
    }

    /// Points earned by one remove/refill pass.
    #[must_use]
    pub fn points_for_pass(&self, pass: &PassSummary) -> u32 {
        let tiles = (pass.matched as u32).saturating_mul(self.match_score);
        let bonus = (pass.specials_created as u32).saturating_mul(self.special_bonus);
        tiles.saturating_add(bonus)
    }

    /// Points earned by a whole cascade.
    #[must_use]
    pub fn points_for(&self, report: &CascadeReport) -> u32 {
        report
            .passes
            .iter()
            .fold(0u32, |total, pass| total.saturating_add(self.points_for_pass(pass)))
    }

    /// Evaluate win/lose. A win takes precedence when both hold.
    #[must_use]
    pub fn outcome(&self, score: u32, moves_remaining: u32) -> GameOutcome {
        if score >= self.target_score {
            GameOutcome::Won
        } else if moves_remaining == 0 {
            GameOutcome::Lost
        } else {
            GameOutcome::InProgress
        }
    }
}
