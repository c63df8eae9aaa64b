use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_STRENGTH: u8 = 1;
pub const MAX_STRENGTH: u8 = 100;

/// Opaque team identifier, stable for the lifetime of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Strength rating, 1-100
    pub strength: u8,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>, strength: u8) -> Self {
        Self { id: TeamId(id), name: name.into(), strength }
    }

    pub fn has_valid_strength(&self) -> bool {
        (MIN_STRENGTH..=MAX_STRENGTH).contains(&self.strength)
    }
}

/// The four clubs a fresh registry is seeded with.
pub fn default_teams() -> Vec<(&'static str, u8)> {
    vec![("Chelsea", 85), ("Arsenal", 80), ("Manchester City", 90), ("Liverpool", 82)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_teams() {
        let teams = default_teams();
        assert_eq!(teams.len(), 4);

        for (name, strength) in &teams {
            assert!(!name.is_empty());
            assert!((MIN_STRENGTH..=MAX_STRENGTH).contains(strength), "{} out of range", name);
        }

        let strongest = teams.iter().max_by_key(|(_, s)| *s).map(|(n, _)| *n);
        assert_eq!(strongest, Some("Manchester City"));
    }

    #[test]
    fn test_strength_bounds() {
        assert!(Team::new(1, "A", 1).has_valid_strength());
        assert!(Team::new(1, "A", 100).has_valid_strength());
        assert!(!Team::new(1, "A", 0).has_valid_strength());
        assert!(!Team::new(1, "A", 101).has_valid_strength());
    }

    #[test]
    fn test_team_id_serializes_transparently() {
        let team = Team::new(7, "Arsenal", 80);
        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["strength"], 80);
    }
}
