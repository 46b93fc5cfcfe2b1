//! Match repository and service traits.

use async_trait::async_trait;

use super::matches_model::{Match, NewMatch};
use crate::errors::Result;
use crate::sync::SyncOutcome;

/// Trait defining the contract for Match repository operations.
#[async_trait]
pub trait MatchRepositoryTrait: Send + Sync {
    /// Upserts a match keyed on its external id.
    ///
    /// Atomic read-diff-write: exactly one write per provider row. The
    /// Updated outcome carries the watched fields that changed (status,
    /// score); cosmetic-only changes come back Unchanged.
    async fn upsert(&self, new_match: NewMatch) -> Result<(Match, SyncOutcome)>;

    fn get_by_id(&self, match_id: &str) -> Result<Option<Match>>;

    fn get_by_external_id(&self, external_id: i64) -> Result<Option<Match>>;

    fn list(&self) -> Result<Vec<Match>>;

    fn list_by_league(&self, league_id: &str) -> Result<Vec<Match>>;
}

/// Read surface consumed by the server. Writes go through the
/// repository trait; only reconcilers hold it.
pub trait MatchServiceTrait: Send + Sync {
    fn get_match(&self, match_id: &str) -> Result<Option<Match>>;

    fn list_matches(&self) -> Result<Vec<Match>>;

    fn list_league_matches(&self, league_id: &str) -> Result<Vec<Match>>;
}
