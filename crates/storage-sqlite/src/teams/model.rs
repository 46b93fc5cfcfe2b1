//! Database model for teams.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use matchday_core::teams::{NewTeam, Team};

/// Database model for teams. The standings block starts out NULL until
/// the first standings sync fills it in.
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
#[diesel(table_name = crate::schema::teams)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct TeamDB {
    pub id: String,
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

impl From<TeamDB> for Team {
    fn from(db: TeamDB) -> Self {
        Self {
            id: db.id,
            external_id: db.external_id,
            name: db.name,
            short_name: db.short_name,
            tla: db.tla,
            crest: db.crest,
            venue: db.venue,
            league_id: db.league_id,
            position: db.position,
            played_games: db.played_games,
            won: db.won,
            draw: db.draw,
            lost: db.lost,
            points: db.points,
            goals_for: db.goals_for,
            goals_against: db.goals_against,
            goal_difference: db.goal_difference,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewTeam> for TeamDB {
    fn from(domain: NewTeam) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: String::new(), // assigned by the repository
            external_id: domain.external_id,
            name: domain.name,
            short_name: domain.short_name,
            tla: domain.tla,
            crest: domain.crest,
            venue: domain.venue,
            league_id: domain.league_id,
            position: None,
            played_games: None,
            won: None,
            draw: None,
            lost: None,
            points: None,
            goals_for: None,
            goals_against: None,
            goal_difference: None,
            created_at: now,
            updated_at: now,
        }
    }
}
