//! Database model for matches.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use matchday_core::matches::{Match, MatchStatus, NewMatch};

/// Database model for matches. The lifecycle status is stored as its
/// text label.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::matches)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct MatchDB {
    pub id: String,
    pub external_id: i64,
    pub league_id: Option<String>,
    pub home_team_external_id: i64,
    pub away_team_external_id: i64,
    pub home_team: String,
    pub away_team: String,
    pub display_name: String,
    pub date: NaiveDateTime,
    pub status: String,
    pub score_home: Option<i32>,
    pub score_away: Option<i32>,
    pub venue: Option<String>,
    pub referee: Option<String>,
    pub matchday: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<MatchDB> for Match {
    fn from(db: MatchDB) -> Self {
        // Only ever written through MatchStatus::as_str.
        let status = db.status.parse().unwrap_or(MatchStatus::Scheduled);
        Self {
            id: db.id,
            external_id: db.external_id,
            league_id: db.league_id,
            home_team_external_id: db.home_team_external_id,
            away_team_external_id: db.away_team_external_id,
            home_team: db.home_team,
            away_team: db.away_team,
            display_name: db.display_name,
            date: db.date,
            status,
            score_home: db.score_home,
            score_away: db.score_away,
            venue: db.venue,
            referee: db.referee,
            matchday: db.matchday,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewMatch> for MatchDB {
    fn from(domain: NewMatch) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: String::new(), // assigned by the repository
            external_id: domain.external_id,
            league_id: domain.league_id,
            home_team_external_id: domain.home_team_external_id,
            away_team_external_id: domain.away_team_external_id,
            home_team: domain.home_team,
            away_team: domain.away_team,
            display_name: domain.display_name,
            date: domain.date,
            status: domain.status.as_str().to_string(),
            score_home: domain.score_home,
            score_away: domain.score_away,
            venue: domain.venue,
            referee: domain.referee,
            matchday: domain.matchday,
            created_at: now,
            updated_at: now,
        }
    }
}
