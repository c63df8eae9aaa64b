//! Championship odds for the run-in.
//!
//! Odds stay at zero until the last few weeks. From then on each team that
//! can still mathematically catch the leader gets a weight of
//! `(points + 1) * decay^gap`, with a small bonus for a positive goal
//! difference, and the weights are normalised into whole percentages.
//!
//! ## Rounding
//!
//! Percentages are rounded independently, then whatever is needed to reach
//! exactly 100 is added to (or taken from) the top-ranked team. With many
//! teams the leader can be off by up to `N-1` points.

use tracing::debug;

use crate::config::PredictionConfig;
use crate::models::{Prediction, Standing};

/// Title odds with the default parameters.
///
/// `standings` must already be ranked (see `compute_standings`); the output
/// follows the same order.
pub fn predict(standings: &[Standing], remaining_weeks: u32) -> Vec<Prediction> {
    predict_with(&PredictionConfig::default(), standings, remaining_weeks)
}

pub fn predict_with(
    config: &PredictionConfig,
    standings: &[Standing],
    remaining_weeks: u32,
) -> Vec<Prediction> {
    if remaining_weeks > config.run_in_weeks {
        return standings.iter().map(|s| prediction(s, 0)).collect();
    }
    let Some(leader) = standings.first() else {
        return Vec::new();
    };

    let max_remaining = remaining_weeks.saturating_mul(config.points_per_win);
    let weights: Vec<f64> = standings
        .iter()
        .map(|s| title_weight(config, s, leader.points, max_remaining))
        .collect();
    let total: f64 = weights.iter().sum();

    let mut percentages: Vec<i32> = if total > 0.0 {
        weights.iter().map(|w| (w / total * 100.0).round() as i32).collect()
    } else {
        let equal = (100.0 / standings.len() as f64).round() as i32;
        vec![equal; standings.len()]
    };

    let sum: i32 = percentages.iter().sum();
    if sum != 100 {
        debug!(sum, adjustment = 100 - sum, "rounding remainder given to leader");
        percentages[0] += 100 - sum;
    }

    standings.iter().zip(percentages).map(|(s, pct)| prediction(s, pct)).collect()
}

/// Unnormalised title weight; 0 once the gap can no longer be closed.
fn title_weight(config: &PredictionConfig, standing: &Standing, leader_points: u32, max_remaining: u32) -> f64 {
    let gap = leader_points.saturating_sub(standing.points);
    if gap > max_remaining {
        return 0.0;
    }

    let mut weight = (standing.points as f64 + 1.0) * config.gap_decay.powi(gap as i32);
    if standing.goal_difference > 0 {
        weight *= config.goal_difference_bonus;
    }
    weight
}

fn prediction(standing: &Standing, percentage: i32) -> Prediction {
    Prediction { team_id: standing.team_id, team_name: standing.team_name.clone(), percentage }
}
