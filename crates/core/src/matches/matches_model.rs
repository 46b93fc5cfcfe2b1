//! Domain model for matches.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::leagues::League;
use matchday_football_data::RemoteMatch;

pub use matchday_football_data::MatchStatus;

/// A match in the normalized lifecycle scheduled → in-play → finished.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    /// Provider-assigned id, the idempotent reconciliation key.
    pub external_id: i64,
    pub league_id: Option<String>,
    pub home_team_external_id: i64,
    pub away_team_external_id: i64,
    /// Home team short name, denormalized for display and payloads.
    pub home_team: String,
    /// Away team short name, denormalized for display and payloads.
    pub away_team: String,
    /// Composed at write time from competition, season, and short names.
    /// Cosmetic: changes here never trigger events.
    pub display_name: String,
    pub date: NaiveDateTime,
    pub status: MatchStatus,
    pub score_home: Option<i32>,
    pub score_away: Option<i32>,
    pub venue: Option<String>,
    pub referee: Option<String>,
    pub matchday: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Normalized match row handed to the upsert.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub external_id: i64,
    pub league_id: Option<String>,
    pub home_team_external_id: i64,
    pub away_team_external_id: i64,
    pub home_team: String,
    pub away_team: String,
    pub display_name: String,
    pub date: NaiveDateTime,
    pub status: MatchStatus,
    pub score_home: Option<i32>,
    pub score_away: Option<i32>,
    pub venue: Option<String>,
    pub referee: Option<String>,
    pub matchday: Option<i32>,
}

impl NewMatch {
    /// Builds the upsert input from a normalized provider row, attaching
    /// the stored league context when present.
    pub fn from_remote(remote: RemoteMatch, league: Option<&League>) -> Self {
        let display_name = match league {
            Some(l) => format!(
                "{} {} - {} x {}",
                l.name, l.season, remote.home.short_name, remote.away.short_name
            ),
            None => format!("{} x {}", remote.home.short_name, remote.away.short_name),
        };
        Self {
            external_id: remote.external_id,
            league_id: league.map(|l| l.id.clone()),
            home_team_external_id: remote.home.external_id,
            away_team_external_id: remote.away.external_id,
            home_team: remote.home.short_name,
            away_team: remote.away.short_name,
            display_name,
            date: remote.utc_date,
            status: remote.status,
            score_home: remote.score_home,
            score_away: remote.score_away,
            venue: remote.venue,
            referee: remote.referee,
            matchday: remote.matchday,
        }
    }
}

/// Watched-field diff for matches: status and score only.
///
/// Both score halves collapse onto a single "score" entry, so a
/// finished match with a fresh result reports `["status", "score"]`.
/// Everything else (venue, referee, display name, date shifts) is
/// persisted silently.
pub fn match_changed_fields(stored: &Match, incoming: &NewMatch) -> Vec<&'static str> {
    let mut changed = Vec::new();
    if stored.status != incoming.status {
        changed.push("status");
    }
    if stored.score_home != incoming.score_home || stored.score_away != incoming.score_away {
        changed.push("score");
    }
    changed
}

/// A backward move in the lifecycle. The provider is authoritative, so
/// the write still happens, but the transition is logged as an anomaly
/// and never synthesizes a new-match event.
pub fn is_status_regression(stored: &Match, incoming: &NewMatch) -> bool {
    incoming.status < stored.status
}
