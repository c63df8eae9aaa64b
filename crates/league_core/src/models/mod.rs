pub mod fixture;
pub mod prediction;
pub mod season;
pub mod snapshot;
pub mod standing;
pub mod team;

pub use fixture::{Match, MatchId, Score};
pub use prediction::Prediction;
pub use season::SeasonState;
pub use snapshot::{FixtureLine, LeagueSnapshot};
pub use standing::Standing;
pub use team::{Team, TeamId, MAX_STRENGTH, MIN_STRENGTH};
