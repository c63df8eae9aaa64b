//! Strength-based match model.
//!
//! Both sides split a fixed goal budget in proportion to their effective
//! strength (home side boosted), then each goal count is drawn from a
//! Poisson distribution with that mean and capped.

use rand::Rng;
use tracing::trace;

use crate::config::SimulationConfig;
use crate::models::Score;

#[derive(Debug, Clone, Default)]
pub struct MatchSimulator {
    config: SimulationConfig,
}

impl MatchSimulator {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Expected goals (home, away) for the given strengths.
    ///
    /// The pair always sums to `2 * base_expected_goals` unless both sides
    /// have zero effective strength, in which case both are 0.
    pub fn expected_goals(&self, home_strength: u8, away_strength: u8) -> (f64, f64) {
        let home = home_strength as f64 * self.config.home_advantage;
        let away = away_strength as f64;
        let total = home + away;
        if total <= 0.0 {
            return (0.0, 0.0);
        }

        let budget = self.config.base_expected_goals * 2.0;
        (budget * home / total, budget * away / total)
    }

    pub fn simulate<R: Rng + ?Sized>(
        &self,
        home_strength: u8,
        away_strength: u8,
        rng: &mut R,
    ) -> Score {
        let (home_xg, away_xg) = self.expected_goals(home_strength, away_strength);
        let cap = self.config.max_goals_per_team;

        let score = Score::new(
            sample_goals(home_xg, cap, rng),
            sample_goals(away_xg, cap, rng),
        );
        trace!(home_xg, away_xg, %score, "match simulated");
        score
    }
}

/// Simulate one match with the default model.
pub fn simulate_match<R: Rng + ?Sized>(home_strength: u8, away_strength: u8, rng: &mut R) -> Score {
    MatchSimulator::default().simulate(home_strength, away_strength, rng)
}

/// Poisson draw by inverse transform (Knuth), capped at `cap`.
///
/// Multiplies uniform [0,1) draws until the product drops to `e^-mean`;
/// the number of draws minus one is the sample. Non-positive or NaN means
/// score nothing without touching the RNG.
pub fn sample_goals<R: Rng + ?Sized>(mean: f64, cap: u8, rng: &mut R) -> u8 {
    if mean.is_nan() || mean <= 0.0 {
        return 0;
    }

    let limit = (-mean).exp();
    let mut draws: u32 = 0;
    let mut product = 1.0_f64;

    while product > limit {
        draws += 1;
        product *= rng.gen::<f64>();
        // goals past the cap are discarded anyway
        if draws > cap as u32 + 1 {
            break;
        }
    }

    (draws.saturating_sub(1)).min(cap as u32) as u8
}
