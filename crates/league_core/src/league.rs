//! In-memory league: registry, schedule and season progress in one value.
//!
//! `League` is the orchestration a host layer calls into. It owns no I/O;
//! persisting a league is a matter of serialising it. Every operation that
//! advances the season takes `&mut self`, so a single `League` can never be
//! advanced from two places at once without the host adding its own lock.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::engine::{compute_standings, generate_fixtures, predict_with, MatchSimulator};
use crate::error::{LeagueError, Result};
use crate::models::{
    FixtureLine, LeagueSnapshot, Match, MatchId, Prediction, Score, SeasonState, Standing, Team,
    TeamId,
};
use crate::registry::TeamRegistry;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    registry: TeamRegistry,
    matches: Vec<Match>,
    season: SeasonState,
    #[serde(default)]
    config: EngineConfig,
}

impl Default for League {
    fn default() -> Self {
        Self::new(TeamRegistry::with_default_teams(), EngineConfig::default())
    }
}

impl League {
    pub fn new(registry: TeamRegistry, config: EngineConfig) -> Self {
        Self { registry, matches: Vec::new(), season: SeasonState::default(), config }
    }

    pub fn teams(&self) -> &[Team] {
        self.registry.all()
    }

    pub fn registry(&self) -> &TeamRegistry {
        &self.registry
    }

    pub fn season(&self) -> &SeasonState {
        &self.season
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========================================================================
    // Roster
    // ========================================================================

    pub fn add_team(&mut self, name: &str, strength: i32) -> Result<TeamId> {
        self.ensure_roster_open()?;
        self.registry.create(name, strength)
    }

    pub fn remove_team(&mut self, id: TeamId) -> Result<Team> {
        self.ensure_roster_open()?;
        self.registry.remove(id)
    }

    fn ensure_roster_open(&self) -> Result<()> {
        if self.season.fixtures_generated {
            return Err(LeagueError::FixturesLocked);
        }
        Ok(())
    }

    // ========================================================================
    // Schedule
    // ========================================================================

    /// Generate the double round-robin, or return the existing one.
    ///
    /// Once fixtures exist this never reshuffles them.
    pub fn generate_fixtures(&mut self) -> Result<&[Match]> {
        if self.season.fixtures_generated {
            debug!("fixtures already generated, returning existing schedule");
            return Ok(&self.matches);
        }

        let matches = generate_fixtures(self.registry.all())?;
        self.season.total_weeks = SeasonState::weeks_for(self.registry.len());
        self.season.fixtures_generated = true;
        self.matches = matches;

        info!(
            teams = self.registry.len(),
            matches = self.matches.len(),
            weeks = self.season.total_weeks,
            "season scheduled"
        );
        Ok(&self.matches)
    }

    pub fn fixtures(&self) -> &[Match] {
        &self.matches
    }

    pub fn fixtures_for_week(&self, week: u32) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.week == week).collect()
    }

    pub fn find_match(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    // ========================================================================
    // Simulation
    // ========================================================================

    /// Simulate every unplayed match of the next week and advance.
    ///
    /// # Errors
    /// * `FixturesNotGenerated` - no schedule yet
    /// * `SeasonCompleted` - the last week has been played
    /// * `NoMatchesForWeek` - the schedule has no matches for the next week
    pub fn play_next_week<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<Match>> {
        if !self.season.fixtures_generated {
            return Err(LeagueError::FixturesNotGenerated);
        }
        if self.season.completed {
            return Err(LeagueError::SeasonCompleted);
        }

        let week = self.season.next_week();
        if !self.matches.iter().any(|m| m.week == week) {
            return Err(LeagueError::NoMatchesForWeek { week });
        }

        let simulator = MatchSimulator::new(self.config.simulation.clone());
        let registry = &self.registry;
        let mut played = Vec::new();

        for m in self.matches.iter_mut().filter(|m| m.week == week) {
            if m.is_unplayed() {
                let home = strength_of(registry, m.home_team_id)?;
                let away = strength_of(registry, m.away_team_id)?;
                let score = simulator.simulate(home, away, rng);
                m.record(score);
                debug!(week, match_id = %m.id, %score, "match played");
            }
            played.push(m.clone());
        }

        self.season.advance_to(week);
        info!(week, total_weeks = self.season.total_weeks, "week played");
        if self.season.completed {
            info!("season completed");
        }

        Ok(played)
    }

    /// Play out the rest of the season. Returns each played week's matches.
    pub fn play_all_weeks<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<BTreeMap<u32, Vec<Match>>> {
        if !self.season.fixtures_generated {
            return Err(LeagueError::FixturesNotGenerated);
        }

        let mut results = BTreeMap::new();
        while !self.season.completed {
            let matches = self.play_next_week(rng)?;
            results.insert(self.season.current_week, matches);
        }
        Ok(results)
    }

    /// Administrative override of a match result.
    ///
    /// # Errors
    /// * `InvalidScore` - either score negative or above 255
    /// * `MatchNotFound` - unknown match id
    pub fn update_match_result(&mut self, id: MatchId, home: i32, away: i32) -> Result<()> {
        let score = validate_score(home, away)?;
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(LeagueError::MatchNotFound { id })?;
        m.record(score);
        info!(match_id = %id, %score, "match result overridden");
        Ok(())
    }

    /// Drop the schedule and start over. Teams are kept.
    pub fn reset(&mut self) {
        self.matches.clear();
        self.season = SeasonState::default();
        info!("season reset");
    }

    // ========================================================================
    // Read side
    // ========================================================================

    pub fn standings(&self) -> Vec<Standing> {
        compute_standings(self.registry.all(), &self.matches)
    }

    /// Weeks left to play. Before scheduling, the full length the current
    /// roster would produce.
    pub fn remaining_weeks(&self) -> u32 {
        if self.season.fixtures_generated {
            self.season.remaining_weeks()
        } else {
            SeasonState::weeks_for(self.registry.len())
        }
    }

    pub fn predictions(&self) -> Vec<Prediction> {
        predict_with(&self.config.prediction, &self.standings(), self.remaining_weeks())
    }

    pub fn snapshot(&self) -> LeagueSnapshot {
        let current_week_results = if self.season.current_week > 0 {
            self.matches
                .iter()
                .filter(|m| m.week == self.season.current_week && m.played && m.result.is_some())
                .map(|m| self.fixture_line(m))
                .collect()
        } else {
            Vec::new()
        };

        let mut all_matches: BTreeMap<u32, Vec<FixtureLine>> = BTreeMap::new();
        for m in &self.matches {
            all_matches.entry(m.week).or_default().push(self.fixture_line(m));
        }

        let standings = self.standings();
        let predictions =
            predict_with(&self.config.prediction, &standings, self.remaining_weeks());

        LeagueSnapshot {
            season: self.season.clone(),
            standings,
            current_week_results,
            all_matches,
            predictions,
        }
    }

    fn fixture_line(&self, m: &Match) -> FixtureLine {
        FixtureLine {
            home_team: self.team_name(m.home_team_id),
            away_team: self.team_name(m.away_team_id),
            score: m.result,
        }
    }

    fn team_name(&self, id: TeamId) -> String {
        self.registry.get(id).map(|t| t.name.clone()).unwrap_or_else(|| format!("#{}", id))
    }
}

fn strength_of(registry: &TeamRegistry, id: TeamId) -> Result<u8> {
    registry.get(id).map(|t| t.strength).ok_or(LeagueError::UnknownTeam { id })
}

/// Boundary check for manually entered scores.
pub fn validate_score(home: i32, away: i32) -> Result<Score> {
    match (u8::try_from(home), u8::try_from(away)) {
        (Ok(h), Ok(a)) => Ok(Score::new(h, a)),
        _ => Err(LeagueError::InvalidScore { home, away }),
    }
}
