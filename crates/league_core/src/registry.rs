//! In-memory team registry.
//!
//! Keeps teams in registration order, which is also the order fixtures are
//! generated in and the order level standings fall back to.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LeagueError, Result};
use crate::models::team::default_teams;
use crate::models::{Team, TeamId, MAX_STRENGTH, MIN_STRENGTH};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamRegistry {
    teams: Vec<Team>,
    next_id: u32,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self { teams: Vec::new(), next_id: 1 }
    }

    /// Registry seeded with the four default clubs.
    pub fn with_default_teams() -> Self {
        let mut registry = Self::new();
        registry.seed_default();
        registry
    }

    /// Seed the default clubs if the registry is empty. No-op otherwise.
    pub fn seed_default(&mut self) {
        if !self.teams.is_empty() {
            return;
        }
        for (name, strength) in default_teams() {
            self.push(name.to_string(), strength);
        }
        info!(teams = self.teams.len(), "seeded default teams");
    }

    /// Register a team.
    ///
    /// # Errors
    /// * `EmptyTeamName` - blank name
    /// * `InvalidStrength` - strength outside 1-100
    /// * `DuplicateTeam` - name already taken (case-insensitive)
    pub fn create(&mut self, name: &str, strength: i32) -> Result<TeamId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeagueError::EmptyTeamName);
        }
        if strength < MIN_STRENGTH as i32 || strength > MAX_STRENGTH as i32 {
            return Err(LeagueError::InvalidStrength { name: name.to_string(), strength });
        }
        if self.find_by_name(name).is_some() {
            return Err(LeagueError::DuplicateTeam { name: name.to_string() });
        }

        let id = self.push(name.to_string(), strength as u8);
        debug!(%id, name, strength, "team created");
        Ok(id)
    }

    pub fn remove(&mut self, id: TeamId) -> Result<Team> {
        let pos = self
            .teams
            .iter()
            .position(|t| t.id == id)
            .ok_or(LeagueError::UnknownTeam { id })?;
        let team = self.teams.remove(pos);
        debug!(%id, name = %team.name, "team removed");
        Ok(team)
    }

    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn all(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    fn push(&mut self, name: String, strength: u8) -> TeamId {
        // Default-constructed registries start at 0
        let id = TeamId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.teams.push(Team { id, name, strength });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let registry = TeamRegistry::with_default_teams();
        let names: Vec<&str> = registry.all().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Chelsea", "Arsenal", "Manchester City", "Liverpool"]);
        let ids: Vec<u32> = registry.all().iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_seed_is_noop_when_populated() {
        let mut registry = TeamRegistry::new();
        registry.create("Everton", 70).unwrap();
        registry.seed_default();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_validates_input() {
        let mut registry = TeamRegistry::new();
        assert_eq!(registry.create("  ", 50), Err(LeagueError::EmptyTeamName));
        assert_eq!(
            registry.create("Spurs", 0),
            Err(LeagueError::InvalidStrength { name: "Spurs".into(), strength: 0 })
        );
        assert!(matches!(registry.create("Spurs", 101), Err(LeagueError::InvalidStrength { .. })));

        let id = registry.create("Spurs", 78).unwrap();
        assert_eq!(registry.get(id).map(|t| t.strength), Some(78));
        assert_eq!(
            registry.create("spurs", 60),
            Err(LeagueError::DuplicateTeam { name: "spurs".into() })
        );
    }

    #[test]
    fn test_remove_keeps_order_and_ids() {
        let mut registry = TeamRegistry::with_default_teams();
        let removed = registry.remove(TeamId(2)).unwrap();
        assert_eq!(removed.name, "Arsenal");
        assert_eq!(registry.remove(TeamId(2)), Err(LeagueError::UnknownTeam { id: TeamId(2) }));

        let id = registry.create("Newcastle", 75).unwrap();
        assert_eq!(id, TeamId(5));
        let ids: Vec<u32> = registry.all().iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_default_constructed_registry_assigns_ids_from_one() {
        let mut registry = TeamRegistry::default();
        assert_eq!(registry.create("Leeds", 66).unwrap(), TeamId(1));
    }
}
