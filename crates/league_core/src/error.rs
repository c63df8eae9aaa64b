use thiserror::Error;

use crate::models::{MatchId, TeamId};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LeagueError {
    #[error("Need at least 2 teams to generate fixtures, found {found}")]
    InsufficientTeams { found: usize },

    #[error("Round-robin needs an even number of teams, found {found}")]
    OddTeamCount { found: usize },

    #[error("Invalid score {home}-{away}: scores must be between 0 and 255")]
    InvalidScore { home: i32, away: i32 },

    #[error("Invalid strength for {name}: {strength} (expected 1-100)")]
    InvalidStrength { name: String, strength: i32 },

    #[error("Team name must not be empty")]
    EmptyTeamName,

    #[error("Team already registered: {name}")]
    DuplicateTeam { name: String },

    #[error("Unknown team: {id}")]
    UnknownTeam { id: TeamId },

    #[error("Match not found: {id}")]
    MatchNotFound { id: MatchId },

    #[error("Fixtures not generated yet")]
    FixturesNotGenerated,

    #[error("Teams cannot change once fixtures are generated")]
    FixturesLocked,

    #[error("League already completed")]
    SeasonCompleted,

    #[error("No matches found for week {week}")]
    NoMatchesForWeek { week: u32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl LeagueError {
    /// Errors caused by the caller's input rather than by season progress.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LeagueError::InsufficientTeams { .. }
                | LeagueError::OddTeamCount { .. }
                | LeagueError::InvalidScore { .. }
                | LeagueError::InvalidStrength { .. }
                | LeagueError::EmptyTeamName
                | LeagueError::DuplicateTeam { .. }
                | LeagueError::InvalidConfig(_)
        )
    }
}

impl From<serde_json::Error> for LeagueError {
    fn from(err: serde_json::Error) -> Self {
        LeagueError::InvalidConfig(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
