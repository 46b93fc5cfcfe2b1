use async_trait::async_trait;
use diesel::prelude::*;
use log::warn;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::matches;
use crate::schema::matches::dsl::*;

use super::model::MatchDB;
use matchday_core::errors::Result;
use matchday_core::matches::{
    is_status_regression, match_changed_fields, Match, MatchRepositoryTrait, NewMatch,
};
use matchday_core::sync::SyncOutcome;

/// Repository for managing match data in the database
pub struct MatchRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl MatchRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl MatchRepositoryTrait for MatchRepository {
    async fn upsert(&self, new_match: NewMatch) -> Result<(Match, SyncOutcome)> {
        self.writer
            .exec(move |conn| {
                let existing = matches
                    .filter(external_id.eq(new_match.external_id))
                    .select(MatchDB::as_select())
                    .first::<MatchDB>(conn)
                    .optional()
                    .into_core()?;

                match existing {
                    Some(match_db) => {
                        let stored: Match = match_db.into();
                        let changed = match_changed_fields(&stored, &new_match);

                        if is_status_regression(&stored, &new_match) {
                            // The provider is authoritative; apply anyway.
                            warn!(
                                "Status regression on match {}: {} -> {}",
                                stored.external_id, stored.status, new_match.status
                            );
                        }

                        let mut match_db: MatchDB = new_match.into();
                        match_db.id = stored.id;
                        match_db.created_at = stored.created_at;

                        diesel::update(matches.find(&match_db.id))
                            .set(&match_db)
                            .execute(conn)
                            .into_core()?;

                        let outcome = if changed.is_empty() {
                            SyncOutcome::Unchanged
                        } else {
                            SyncOutcome::Updated(
                                changed.iter().map(|f| f.to_string()).collect(),
                            )
                        };
                        Ok((match_db.into(), outcome))
                    }
                    None => {
                        let mut match_db: MatchDB = new_match.into();
                        match_db.id = uuid::Uuid::new_v4().to_string();

                        diesel::insert_into(matches::table)
                            .values(&match_db)
                            .execute(conn)
                            .into_core()?;

                        Ok((match_db.into(), SyncOutcome::Created))
                    }
                }
            })
            .await
    }

    fn get_by_id(&self, match_id: &str) -> Result<Option<Match>> {
        let mut conn = get_connection(&self.pool)?;

        let result = matches
            .select(MatchDB::as_select())
            .find(match_id)
            .first::<MatchDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(result.map(Match::from))
    }

    fn get_by_external_id(&self, external_id_param: i64) -> Result<Option<Match>> {
        let mut conn = get_connection(&self.pool)?;

        let result = matches
            .filter(external_id.eq(external_id_param))
            .select(MatchDB::as_select())
            .first::<MatchDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(result.map(Match::from))
    }

    fn list(&self) -> Result<Vec<Match>> {
        let mut conn = get_connection(&self.pool)?;

        let results = matches
            .select(MatchDB::as_select())
            .order(date.asc())
            .load::<MatchDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Match::from).collect())
    }

    fn list_by_league(&self, league_id_param: &str) -> Result<Vec<Match>> {
        let mut conn = get_connection(&self.pool)?;

        let results = matches
            .filter(league_id.eq(league_id_param))
            .select(MatchDB::as_select())
            .order(date.asc())
            .load::<MatchDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Match::from).collect())
    }
}
