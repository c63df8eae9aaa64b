use serde::{Deserialize, Serialize};

/// Progress of the running season. One per league.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonState {
    /// Last week played; 0 before kick-off
    pub current_week: u32,
    pub total_weeks: u32,
    pub fixtures_generated: bool,
    pub started: bool,
    pub completed: bool,
}

impl SeasonState {
    /// Weeks in a double round-robin for `team_count` teams.
    pub fn weeks_for(team_count: usize) -> u32 {
        (2 * team_count.saturating_sub(1)) as u32
    }

    pub fn remaining_weeks(&self) -> u32 {
        self.total_weeks.saturating_sub(self.current_week)
    }

    pub fn next_week(&self) -> u32 {
        self.current_week + 1
    }

    pub(crate) fn advance_to(&mut self, week: u32) {
        self.current_week = week;
        self.started = true;
        if week >= self.total_weeks {
            self.completed = true;
        }
    }
}
