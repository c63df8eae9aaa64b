use serde::{Deserialize, Serialize};

use super::TeamId;

/// Championship chance for one team, in whole percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub team_id: TeamId,
    pub team_name: String,
    pub percentage: i32,
}
