//! Raw provider payloads and the normalized shapes handed to reconcilers.
//!
//! The `Raw*` structs mirror the football-data.org v4 JSON. Normalization
//! is per-row tolerant: a row missing its id or carrying an unparsable
//! date is logged and dropped, and the rest of the batch survives.

use chrono::NaiveDateTime;
use log::warn;
use serde::{Deserialize, Serialize};

/// Normalized match lifecycle.
///
/// Provider labels collapse onto three states. The variant order is the
/// modeled progression; a backward move between polls is a data anomaly
/// the reconciler logs but still applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InPlay,
    Finished,
}

impl MatchStatus {
    /// Maps a provider status label onto the modeled lifecycle.
    ///
    /// Returns `None` for labels the provider has not documented; callers
    /// treat those rows as malformed and skip them.
    pub fn from_provider(label: &str) -> Option<Self> {
        match label {
            "SCHEDULED" | "TIMED" | "POSTPONED" => Some(MatchStatus::Scheduled),
            "IN_PLAY" | "LIVE" | "PAUSED" | "SUSPENDED" => Some(MatchStatus::InPlay),
            "FINISHED" | "AWARDED" | "CANCELED" | "CANCELLED" => Some(MatchStatus::Finished),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::InPlay => "in_play",
            MatchStatus::Finished => "finished",
        }
    }
}

impl std::str::FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(MatchStatus::Scheduled),
            "in_play" => Ok(MatchStatus::InPlay),
            "finished" => Ok(MatchStatus::Finished),
            other => Err(format!("unknown match status: {other}")),
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Normalized shapes
// ============================================================================

/// Competition header used by the league sync.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteCompetition {
    pub external_id: i64,
    pub name: String,
    pub country: String,
    pub season: String,
}

/// Team profile row from the competition teams endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteTeam {
    pub external_id: i64,
    pub name: String,
    pub short_name: String,
    pub tla: Option<String>,
    pub crest: Option<String>,
    pub venue: Option<String>,
}

/// One side of a match as reported by the provider.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteMatchSide {
    pub external_id: i64,
    pub name: String,
    pub short_name: String,
    pub crest: Option<String>,
}

/// Normalized match row.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteMatch {
    pub external_id: i64,
    pub utc_date: NaiveDateTime,
    pub status: MatchStatus,
    pub matchday: Option<i32>,
    pub home: RemoteMatchSide,
    pub away: RemoteMatchSide,
    pub score_home: Option<i32>,
    pub score_away: Option<i32>,
    pub venue: Option<String>,
    pub referee: Option<String>,
}

/// One row of the league table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteStandingRow {
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

// ============================================================================
// Raw provider payloads
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct RawArea {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSeason {
    pub start_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCompetition {
    pub id: i64,
    pub name: String,
    pub area: Option<RawArea>,
    pub current_season: Option<RawSeason>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTeam {
    pub id: i64,
    pub name: String,
    pub short_name: Option<String>,
    pub tla: Option<String>,
    pub crest: Option<String>,
    pub venue: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTeamsResponse {
    pub teams: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawMatchSide {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub crest: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawFullTime {
    pub home: Option<i32>,
    pub away: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawScore {
    pub full_time: Option<RawFullTime>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawReferee {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawMatch {
    pub id: Option<i64>,
    pub utc_date: Option<String>,
    pub status: Option<String>,
    pub matchday: Option<i32>,
    pub home_team: Option<RawMatchSide>,
    pub away_team: Option<RawMatchSide>,
    pub score: Option<RawScore>,
    pub venue: Option<String>,
    #[serde(default)]
    pub referees: Vec<RawReferee>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMatchesResponse {
    pub matches: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTableTeam {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub short_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTableRow {
    pub position: i32,
    pub team: RawTableTeam,
    pub played_games: i32,
    pub won: i32,
    pub draw: i32,
    pub lost: i32,
    pub points: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStanding {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub table: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawStandingsResponse {
    pub standings: Vec<RawStanding>,
}

// ============================================================================
// Normalization
// ============================================================================

pub(crate) fn normalize_competition(raw: RawCompetition) -> RemoteCompetition {
    let country = raw
        .area
        .and_then(|a| a.name)
        .unwrap_or_else(|| "Unknown".to_string());
    // The season label is the start year of the current season.
    let season = raw
        .current_season
        .and_then(|s| s.start_date)
        .and_then(|d| d.get(..4).map(str::to_string))
        .unwrap_or_default();
    RemoteCompetition {
        external_id: raw.id,
        name: raw.name,
        country,
        season,
    }
}

pub(crate) fn normalize_team(value: serde_json::Value) -> Option<RemoteTeam> {
    let raw: RawTeam = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("Skipping malformed team row: {err}");
            return None;
        }
    };
    let short_name = raw.short_name.unwrap_or_else(|| raw.name.clone());
    Some(RemoteTeam {
        external_id: raw.id,
        name: raw.name,
        short_name,
        tla: raw.tla,
        crest: raw.crest,
        venue: raw.venue,
    })
}

fn normalize_side(raw: RawMatchSide) -> Option<RemoteMatchSide> {
    let external_id = raw.id?;
    let name = raw.name.unwrap_or_else(|| format!("Team {external_id}"));
    let short_name = raw.short_name.unwrap_or_else(|| name.clone());
    Some(RemoteMatchSide {
        external_id,
        name,
        short_name,
        crest: raw.crest,
    })
}

pub(crate) fn normalize_match(value: serde_json::Value) -> Option<RemoteMatch> {
    let raw: RawMatch = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("Skipping malformed match row: {err}");
            return None;
        }
    };

    let Some(external_id) = raw.id else {
        warn!("Skipping match row without id");
        return None;
    };

    let utc_date = raw
        .utc_date
        .as_deref()
        .and_then(|d| NaiveDateTime::parse_from_str(d, "%Y-%m-%dT%H:%M:%SZ").ok());
    let Some(utc_date) = utc_date else {
        warn!("Skipping match {external_id}: unparsable date {:?}", raw.utc_date);
        return None;
    };

    let status = raw.status.as_deref().and_then(MatchStatus::from_provider);
    let Some(status) = status else {
        warn!("Skipping match {external_id}: unknown status {:?}", raw.status);
        return None;
    };

    let home = raw.home_team.and_then(normalize_side);
    let away = raw.away_team.and_then(normalize_side);
    let (Some(home), Some(away)) = (home, away) else {
        warn!("Skipping match {external_id}: missing team reference");
        return None;
    };

    let full_time = raw.score.and_then(|s| s.full_time);
    let (score_home, score_away) = match full_time {
        Some(ft) => (ft.home, ft.away),
        None => (None, None),
    };

    Some(RemoteMatch {
        external_id,
        utc_date,
        status,
        matchday: raw.matchday,
        home,
        away,
        score_home,
        score_away,
        venue: raw.venue,
        referee: raw.referees.into_iter().find_map(|r| r.name),
    })
}

pub(crate) fn normalize_standing_row(value: serde_json::Value) -> Option<RemoteStandingRow> {
    let raw: RawTableRow = match serde_json::from_value(value) {
        Ok(raw) => raw,
        Err(err) => {
            warn!("Skipping malformed standing row: {err}");
            return None;
        }
    };
    let Some(team_external_id) = raw.team.id else {
        warn!("Skipping standing row without team id");
        return None;
    };
    let team_name = raw
        .team
        .name
        .unwrap_or_else(|| format!("Team {team_external_id}"));
    let team_short_name = raw.team.short_name.unwrap_or_else(|| team_name.clone());
    Some(RemoteStandingRow {
        team_external_id,
        team_name,
        team_short_name,
        position: raw.position,
        played_games: raw.played_games,
        won: raw.won,
        draw: raw.draw,
        lost: raw.lost,
        points: raw.points,
        goals_for: raw.goals_for,
        goals_against: raw.goals_against,
        goal_difference: raw.goal_difference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn provider_status_labels_collapse_onto_lifecycle() {
        assert_eq!(
            MatchStatus::from_provider("TIMED"),
            Some(MatchStatus::Scheduled)
        );
        assert_eq!(
            MatchStatus::from_provider("PAUSED"),
            Some(MatchStatus::InPlay)
        );
        assert_eq!(
            MatchStatus::from_provider("FINISHED"),
            Some(MatchStatus::Finished)
        );
        assert_eq!(MatchStatus::from_provider("HALF_TIME_BREAK"), None);
    }

    #[test]
    fn lifecycle_order_is_monotonic() {
        assert!(MatchStatus::Scheduled < MatchStatus::InPlay);
        assert!(MatchStatus::InPlay < MatchStatus::Finished);
    }

    #[test]
    fn normalize_match_reads_full_time_score() {
        let row = json!({
            "id": 555,
            "utcDate": "2026-08-30T19:00:00Z",
            "status": "FINISHED",
            "matchday": 22,
            "homeTeam": { "id": 1, "name": "CR Flamengo", "shortName": "Flamengo" },
            "awayTeam": { "id": 2, "name": "CR Vasco da Gama", "shortName": "Vasco" },
            "score": { "fullTime": { "home": 2, "away": 1 } },
            "referees": [{ "name": "Anderson Daronco" }]
        });
        let m = normalize_match(row).unwrap();
        assert_eq!(m.external_id, 555);
        assert_eq!(m.status, MatchStatus::Finished);
        assert_eq!(m.score_home, Some(2));
        assert_eq!(m.score_away, Some(1));
        assert_eq!(m.home.short_name, "Flamengo");
        assert_eq!(m.referee.as_deref(), Some("Anderson Daronco"));
    }

    #[test]
    fn normalize_match_skips_row_without_id() {
        let row = json!({
            "utcDate": "2026-08-30T19:00:00Z",
            "status": "SCHEDULED",
            "homeTeam": { "id": 1, "name": "A" },
            "awayTeam": { "id": 2, "name": "B" }
        });
        assert!(normalize_match(row).is_none());
    }

    #[test]
    fn normalize_match_skips_unparsable_date() {
        let row = json!({
            "id": 7,
            "utcDate": "yesterday-ish",
            "status": "SCHEDULED",
            "homeTeam": { "id": 1, "name": "A" },
            "awayTeam": { "id": 2, "name": "B" }
        });
        assert!(normalize_match(row).is_none());
    }

    #[test]
    fn normalize_team_falls_back_to_name_for_short_name() {
        let team = normalize_team(json!({ "id": 9, "name": "Santos FC" })).unwrap();
        assert_eq!(team.short_name, "Santos FC");
    }

    #[test]
    fn normalize_standing_row_reads_table_fields() {
        let row = json!({
            "position": 1,
            "team": { "id": 1, "name": "CR Flamengo", "shortName": "Flamengo" },
            "playedGames": 22,
            "won": 15,
            "draw": 4,
            "lost": 3,
            "points": 49,
            "goalsFor": 41,
            "goalsAgainst": 15,
            "goalDifference": 26
        });
        let r = normalize_standing_row(row).unwrap();
        assert_eq!(r.team_external_id, 1);
        assert_eq!(r.points, 49);
        assert_eq!(r.goal_difference, 26);
    }
}
