//! The four season algorithms. Pure functions over explicit inputs; the
//! only randomness comes from the RNG handed to the match simulator.

pub mod fixtures;
pub mod match_sim;
pub mod prediction;
pub mod standings;

pub use fixtures::generate_fixtures;
pub use match_sim::{sample_goals, simulate_match, MatchSimulator};
pub use prediction::{predict, predict_with};
pub use standings::{compute_standings, POINTS_FOR_DRAW, POINTS_FOR_WIN};
