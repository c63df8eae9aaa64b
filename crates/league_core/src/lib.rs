//! # league_core - Round-Robin League Simulation Engine
//!
//! Simulates a double round-robin football league from team strength
//! ratings.
//!
//! ## Features
//! - Circle-method fixture generation (home and away)
//! - Poisson match model with home advantage
//! - League table with points / goal difference / goals-for tie-breaks
//! - Championship odds for the run-in
//! - Reproducible seasons when driven by a seeded RNG
//!
//! ## Example
//!
//! ```rust
//! use league_core::League;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut league = League::default();
//! league.generate_fixtures().unwrap();
//! league.play_all_weeks(&mut ChaCha8Rng::seed_from_u64(42)).unwrap();
//!
//! let table = league.standings();
//! assert_eq!(table.len(), 4);
//! assert!(table.iter().all(|s| s.played == 6));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod league;
pub mod models;
pub mod registry;

pub use config::{EngineConfig, PredictionConfig, SimulationConfig};
pub use engine::{
    compute_standings, generate_fixtures, predict, predict_with, simulate_match, MatchSimulator,
};
pub use error::{LeagueError, Result};
pub use league::{validate_score, League};
pub use models::{
    FixtureLine, LeagueSnapshot, Match, MatchId, Prediction, Score, SeasonState, Standing, Team,
    TeamId,
};
pub use registry::TeamRegistry;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_core_surface_end_to_end() {
        let teams = TeamRegistry::with_default_teams().all().to_vec();
        let mut matches = generate_fixtures(&teams).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(2025);
        let strength = |id: TeamId| teams.iter().find(|t| t.id == id).unwrap().strength;
        for m in matches.iter_mut().filter(|m| m.week <= 5) {
            let score = simulate_match(strength(m.home_team_id), strength(m.away_team_id), &mut rng);
            m.record(score);
        }

        let table = compute_standings(&teams, &matches);
        assert!(table.iter().all(|s| s.played == 5));

        let predictions = predict(&table, 1);
        assert_eq!(predictions.iter().map(|p| p.percentage).sum::<i32>(), 100);
        assert_eq!(predictions[0].team_id, table[0].team_id);
    }
}
