//! Database model for leagues.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use matchday_core::leagues::{League, NewLeague};

/// Database model for leagues. Member team ids are stored as a JSON
/// array in a text column.
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
#[diesel(table_name = crate::schema::leagues)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LeagueDB {
    pub id: String,
    pub external_id: i64,
    pub name: String,
    pub country: String,
    pub season: String,
    pub team_ids: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<LeagueDB> for League {
    fn from(db: LeagueDB) -> Self {
        let team_ids = serde_json::from_str(&db.team_ids).unwrap_or_default();
        Self {
            id: db.id,
            external_id: db.external_id,
            name: db.name,
            country: db.country,
            season: db.season,
            team_ids,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewLeague> for LeagueDB {
    fn from(domain: NewLeague) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: String::new(), // assigned by the repository
            external_id: domain.external_id,
            name: domain.name,
            country: domain.country,
            season: domain.season,
            team_ids: "[]".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
