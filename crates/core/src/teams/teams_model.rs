//! Domain model for teams and their standings block.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use matchday_football_data::{RemoteStandingRow, RemoteTeam};

/// A team, including the mutable standings block reconciliation watches.
///
/// Profile fields (name, crest, venue, ...) are persisted silently; only
/// changes to the standings block trigger a table-updated event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    /// Provider-assigned id, the idempotent reconciliation key.
    pub external_id: i64,
    pub name: String,
    pub short_name: String,
    pub tla: Option<String>,
    pub crest: Option<String>,
    pub venue: Option<String>,
    pub league_id: Option<String>,
    pub position: Option<i32>,
    pub played_games: Option<i32>,
    pub won: Option<i32>,
    pub draw: Option<i32>,
    pub lost: Option<i32>,
    pub points: Option<i32>,
    pub goals_for: Option<i32>,
    pub goals_against: Option<i32>,
    pub goal_difference: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Profile fields written by the league/teams sync. None of these are
/// watched, so a profile upsert reports Created or Unchanged only.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub external_id: i64,
    pub name: String,
    pub short_name: String,
    pub tla: Option<String>,
    pub crest: Option<String>,
    pub venue: Option<String>,
    pub league_id: Option<String>,
}

impl From<RemoteTeam> for NewTeam {
    fn from(remote: RemoteTeam) -> Self {
        Self {
            external_id: remote.external_id,
            name: remote.name,
            short_name: remote.short_name,
            tla: remote.tla,
            crest: remote.crest,
            venue: remote.venue,
            league_id: None,
        }
    }
}

/// One table row applied as a partial team update by the standing sync.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingUpdate {
    pub team_external_id: i64,
    pub team_name: String,
    pub team_short_name: String,
    pub position: i32,
    pub played_games: i32,
    pub won: i32,
    pub draw: i32,
    pub lost: i32,
    pub points: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
}

impl From<RemoteStandingRow> for StandingUpdate {
    fn from(row: RemoteStandingRow) -> Self {
        Self {
            team_external_id: row.team_external_id,
            team_name: row.team_name,
            team_short_name: row.team_short_name,
            position: row.position,
            played_games: row.played_games,
            won: row.won,
            draw: row.draw,
            lost: row.lost,
            points: row.points,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
            goal_difference: row.goal_difference,
        }
    }
}

/// Wire names of the watched standings fields, in reporting order.
pub const WATCHED_STANDING_FIELDS: [&str; 9] = [
    "position",
    "points",
    "playedGames",
    "won",
    "draw",
    "lost",
    "goalDifference",
    "goalsAgainst",
    "goalsFor",
];

/// Watched-field diff for the standings block.
///
/// Field names use the wire spelling so the changed list can be reported
/// as-is in payloads and logs. Equality is exact; source values are
/// integers, so no tolerance applies.
pub fn standing_changed_fields(stored: &Team, incoming: &StandingUpdate) -> Vec<&'static str> {
    let mut changed = Vec::new();
    let watched: [(&'static str, Option<i32>, i32); 9] = [
        ("position", stored.position, incoming.position),
        ("points", stored.points, incoming.points),
        ("playedGames", stored.played_games, incoming.played_games),
        ("won", stored.won, incoming.won),
        ("draw", stored.draw, incoming.draw),
        ("lost", stored.lost, incoming.lost),
        ("goalDifference", stored.goal_difference, incoming.goal_difference),
        ("goalsAgainst", stored.goals_against, incoming.goals_against),
        ("goalsFor", stored.goals_for, incoming.goals_for),
    ];
    for (name, stored_value, incoming_value) in watched {
        if stored_value != Some(incoming_value) {
            changed.push(name);
        }
    }
    changed
}
