//! Team repository and service traits.

use async_trait::async_trait;

use super::teams_model::{NewTeam, StandingUpdate, Team};
use crate::errors::Result;
use crate::sync::SyncOutcome;

/// Trait defining the contract for Team repository operations.
#[async_trait]
pub trait TeamRepositoryTrait: Send + Sync {
    /// Upserts the profile block keyed on the external id.
    ///
    /// Profile fields are not watched, so the outcome is Created or
    /// Unchanged; an existing row is refreshed silently either way.
    async fn upsert_profile(&self, new_team: NewTeam) -> Result<(Team, SyncOutcome)>;

    /// Applies one standings row as a partial update.
    ///
    /// Creates the team if the row arrives before the profile sync. The
    /// outcome's Updated variant carries the changed wire field names.
    async fn upsert_standing(&self, update: StandingUpdate) -> Result<(Team, SyncOutcome)>;

    fn get_by_id(&self, team_id: &str) -> Result<Option<Team>>;

    fn get_by_external_id(&self, external_id: i64) -> Result<Option<Team>>;

    fn list(&self) -> Result<Vec<Team>>;
}

/// Read surface consumed by the server. Writes go through the
/// repository trait; only reconcilers hold it.
pub trait TeamServiceTrait: Send + Sync {
    fn get_team(&self, team_id: &str) -> Result<Option<Team>>;

    fn list_teams(&self) -> Result<Vec<Team>>;
}
