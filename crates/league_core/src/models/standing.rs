use serde::{Deserialize, Serialize};

use super::TeamId;

/// One row of the league table. Always derived from the match set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: u32,
}

impl Standing {
    pub fn empty(team_id: TeamId, team_name: impl Into<String>) -> Self {
        Self {
            team_id,
            team_name: team_name.into(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }
}
