//! League repository and service traits.
//!
//! These traits define the contract for league operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;

use super::leagues_model::{League, NewLeague};
use crate::errors::Result;
use crate::sync::SyncOutcome;

/// Trait defining the contract for League repository operations.
#[async_trait]
pub trait LeagueRepositoryTrait: Send + Sync {
    /// Upserts a league keyed on its external id.
    ///
    /// The read-diff-write runs atomically; the returned outcome says
    /// whether the record was created. Existing leagues are refreshed
    /// silently, so Updated is never returned here.
    async fn upsert(&self, new_league: NewLeague) -> Result<(League, SyncOutcome)>;

    /// Replaces the stored member-team id list.
    async fn set_team_ids(&self, league_id: &str, team_ids: Vec<String>) -> Result<League>;

    /// Retrieves a league by its internal ID.
    fn get_by_id(&self, league_id: &str) -> Result<Option<League>>;

    /// Retrieves a league by its provider-assigned id.
    fn get_by_external_id(&self, external_id: i64) -> Result<Option<League>>;

    fn list(&self) -> Result<Vec<League>>;
}

/// Read surface consumed by the server. Writes go through the
/// repository trait; only reconcilers hold it.
pub trait LeagueServiceTrait: Send + Sync {
    fn get_league(&self, league_id: &str) -> Result<Option<League>>;

    fn list_leagues(&self) -> Result<Vec<League>>;
}
