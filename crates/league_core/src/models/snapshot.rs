use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Prediction, Score, SeasonState, Standing};

/// A fixture with team names resolved, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureLine {
    pub home_team: String,
    pub away_team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}

/// Full read-side view of a league at one point in the season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub season: SeasonState,
    pub standings: Vec<Standing>,
    /// Played results of `season.current_week`
    pub current_week_results: Vec<FixtureLine>,
    pub all_matches: BTreeMap<u32, Vec<FixtureLine>>,
    pub predictions: Vec<Prediction>,
}
