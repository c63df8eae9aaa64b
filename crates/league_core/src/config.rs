//! # Engine Configuration
//!
//! Every tuning constant of the match model and the title-odds estimator
//! lives here instead of being scattered as magic numbers.
//!
//! | Section | Drives |
//! |---------|--------|
//! | `simulation` | home advantage, goal budget, per-team goal cap |
//! | `prediction` | run-in window, gap decay, goal-difference bonus |
//!
//! ## Usage
//!
//! ```rust
//! use league_core::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let goals_galore = EngineConfig::high_scoring();
//! assert!(goals_galore.simulation.base_expected_goals > config.simulation.base_expected_goals);
//! ```
//!
//! ## Environment Variables
//!
//! - `LEAGUE_SIM_PROFILE`: Select preset (high_scoring, low_scoring, default)

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{LeagueError, Result};

pub const PROFILE_ENV_VAR: &str = "LEAGUE_SIM_PROFILE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub prediction: PredictionConfig,
}

impl EngineConfig {
    /// Realistic league football (default)
    pub fn realistic() -> Self {
        Self::default()
    }

    /// Bigger goal budget and a stronger home crowd
    pub fn high_scoring() -> Self {
        Self {
            simulation: SimulationConfig {
                home_advantage: 1.15,
                base_expected_goals: 2.0,
                ..SimulationConfig::default()
            },
            prediction: PredictionConfig::default(),
        }
    }

    /// Tight, cagey matches
    pub fn low_scoring() -> Self {
        Self {
            simulation: SimulationConfig {
                home_advantage: 1.05,
                base_expected_goals: 1.1,
                ..SimulationConfig::default()
            },
            prediction: PredictionConfig::default(),
        }
    }

    /// Load from environment variable LEAGUE_SIM_PROFILE or use default
    pub fn from_env_or_default() -> Self {
        match env::var(PROFILE_ENV_VAR).unwrap_or_default().to_lowercase().as_str() {
            "high_scoring" => Self::high_scoring(),
            "low_scoring" => Self::low_scoring(),
            _ => Self::default(),
        }
    }

    /// Parse a JSON document; missing sections fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;
        self.prediction.validate()
    }
}

/// Match model parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Multiplier on the home side's strength
    pub home_advantage: f64,
    /// Per-team share of the fixed goal budget; the match total is twice this
    pub base_expected_goals: f64,
    pub max_goals_per_team: u8,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { home_advantage: 1.10, base_expected_goals: 1.5, max_goals_per_team: 7 }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.home_advantage.is_finite() && self.home_advantage > 0.0) {
            return Err(LeagueError::InvalidConfig(format!(
                "home_advantage must be positive, got {}",
                self.home_advantage
            )));
        }
        if !(self.base_expected_goals.is_finite() && self.base_expected_goals >= 0.0) {
            return Err(LeagueError::InvalidConfig(format!(
                "base_expected_goals must be non-negative, got {}",
                self.base_expected_goals
            )));
        }
        Ok(())
    }
}

/// Title-odds parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Odds stay at zero while more weeks than this remain
    pub run_in_weeks: u32,
    pub points_per_win: u32,
    /// Weight multiplier per point behind the leader
    pub gap_decay: f64,
    /// Weight multiplier for a positive goal difference
    pub goal_difference_bonus: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self { run_in_weeks: 3, points_per_win: 3, gap_decay: 0.7, goal_difference_bonus: 1.1 }
    }
}

impl PredictionConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.gap_decay.is_finite() && self.gap_decay > 0.0 && self.gap_decay <= 1.0) {
            return Err(LeagueError::InvalidConfig(format!(
                "gap_decay must be in (0, 1], got {}",
                self.gap_decay
            )));
        }
        if !(self.goal_difference_bonus.is_finite() && self.goal_difference_bonus > 0.0) {
            return Err(LeagueError::InvalidConfig(format!(
                "goal_difference_bonus must be positive, got {}",
                self.goal_difference_bonus
            )));
        }
        Ok(())
    }
}
