//! Domain model for leagues.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use matchday_football_data::RemoteCompetition;

/// A competition tracked by reconciliation.
///
/// `team_ids` holds the resolved internal ids of the member teams; the
/// join is performed by the league sync at upsert time rather than
/// expanded lazily on read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: String,
    /// Provider-assigned id, the idempotent reconciliation key.
    pub external_id: i64,
    pub name: String,
    pub country: String,
    pub season: String,
    pub team_ids: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Normalized league shell handed to the upsert.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeague {
    pub external_id: i64,
    pub name: String,
    pub country: String,
    pub season: String,
}

impl From<&RemoteCompetition> for NewLeague {
    fn from(remote: &RemoteCompetition) -> Self {
        Self {
            external_id: remote.external_id,
            name: remote.name.clone(),
            country: remote.country.clone(),
            season: remote.season.clone(),
        }
    }
}
