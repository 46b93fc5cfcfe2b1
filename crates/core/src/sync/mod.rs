pub mod league_sync;
pub mod match_sync;
pub mod outcome;
pub mod standing_sync;

pub use league_sync::LeagueSync;
pub use match_sync::MatchSync;
pub use outcome::{SyncOutcome, SyncReport};
pub use standing_sync::StandingSync;
