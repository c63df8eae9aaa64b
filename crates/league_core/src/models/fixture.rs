use serde::{Deserialize, Serialize};
use std::fmt;

use super::TeamId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub u32);

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Final score of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }

    pub fn is_draw(&self) -> bool {
        self.home == self.away
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// A scheduled fixture. Carries its result once played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// 1-indexed
    pub week: u32,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Score>,
    #[serde(default)]
    pub played: bool,
}

impl Match {
    pub fn scheduled(id: u32, week: u32, home_team_id: TeamId, away_team_id: TeamId) -> Self {
        Self { id: MatchId(id), week, home_team_id, away_team_id, result: None, played: false }
    }

    pub fn is_unplayed(&self) -> bool {
        self.result.is_none() && !self.played
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Records a final score. An existing result is overwritten.
    pub fn record(&mut self, score: Score) {
        self.result = Some(score);
        self.played = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduled_match_is_unplayed() {
        let mut m = Match::scheduled(1, 1, TeamId(1), TeamId(2));
        assert!(m.is_unplayed());
        assert!(m.involves(TeamId(2)));
        assert!(!m.involves(TeamId(3)));

        m.record(Score::new(2, 1));
        assert!(!m.is_unplayed());
        assert_eq!(m.result, Some(Score::new(2, 1)));
    }

    #[test]
    fn test_unplayed_match_omits_result_in_json() {
        let m = Match::scheduled(3, 2, TeamId(1), TeamId(4));
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("result").is_none());
        assert_eq!(json["played"], false);

        let back: Match = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }
}
