use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::leagues;
use crate::schema::leagues::dsl::*;

use super::model::LeagueDB;
use matchday_core::errors::Result;
use matchday_core::leagues::{League, LeagueRepositoryTrait, NewLeague};
use matchday_core::sync::SyncOutcome;

/// Repository for managing league data in the database
pub struct LeagueRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl LeagueRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl LeagueRepositoryTrait for LeagueRepository {
    async fn upsert(&self, new_league: NewLeague) -> Result<(League, SyncOutcome)> {
        self.writer
            .exec(move |conn| {
                let existing = leagues
                    .filter(external_id.eq(new_league.external_id))
                    .select(LeagueDB::as_select())
                    .first::<LeagueDB>(conn)
                    .optional()
                    .into_core()?;

                match existing {
                    Some(mut league_db) => {
                        // League creation is the only watched change; the
                        // header is refreshed silently.
                        league_db.name = new_league.name;
                        league_db.country = new_league.country;
                        league_db.season = new_league.season;
                        league_db.updated_at = chrono::Utc::now().naive_utc();

                        diesel::update(leagues.find(&league_db.id))
                            .set(&league_db)
                            .execute(conn)
                            .into_core()?;

                        Ok((league_db.into(), SyncOutcome::Unchanged))
                    }
                    None => {
                        let mut league_db: LeagueDB = new_league.into();
                        league_db.id = uuid::Uuid::new_v4().to_string();

                        diesel::insert_into(leagues::table)
                            .values(&league_db)
                            .execute(conn)
                            .into_core()?;

                        Ok((league_db.into(), SyncOutcome::Created))
                    }
                }
            })
            .await
    }

    async fn set_team_ids(&self, league_id: &str, new_team_ids: Vec<String>) -> Result<League> {
        let league_id = league_id.to_string();
        self.writer
            .exec(move |conn| {
                let mut league_db = leagues
                    .select(LeagueDB::as_select())
                    .find(&league_id)
                    .first::<LeagueDB>(conn)
                    .into_core()?;

                league_db.team_ids =
                    serde_json::to_string(&new_team_ids).unwrap_or_else(|_| "[]".to_string());
                league_db.updated_at = chrono::Utc::now().naive_utc();

                diesel::update(leagues.find(&league_db.id))
                    .set(&league_db)
                    .execute(conn)
                    .into_core()?;

                Ok(league_db.into())
            })
            .await
    }

    fn get_by_id(&self, league_id: &str) -> Result<Option<League>> {
        let mut conn = get_connection(&self.pool)?;

        let result = leagues
            .select(LeagueDB::as_select())
            .find(league_id)
            .first::<LeagueDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(result.map(League::from))
    }

    fn get_by_external_id(&self, external_id_param: i64) -> Result<Option<League>> {
        let mut conn = get_connection(&self.pool)?;

        let result = leagues
            .filter(external_id.eq(external_id_param))
            .select(LeagueDB::as_select())
            .first::<LeagueDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(result.map(League::from))
    }

    fn list(&self) -> Result<Vec<League>> {
        let mut conn = get_connection(&self.pool)?;

        let results = leagues
            .select(LeagueDB::as_select())
            .order(created_at.asc())
            .load::<LeagueDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(League::from).collect())
    }
}
