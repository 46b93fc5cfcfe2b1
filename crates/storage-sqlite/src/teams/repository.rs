use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::teams;
use crate::schema::teams::dsl::*;

use super::model::TeamDB;
use matchday_core::errors::Result;
use matchday_core::sync::SyncOutcome;
use matchday_core::teams::{
    standing_changed_fields, NewTeam, StandingUpdate, Team, TeamRepositoryTrait,
};

/// Repository for managing team data in the database
pub struct TeamRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl TeamRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl TeamRepositoryTrait for TeamRepository {
    async fn upsert_profile(&self, new_team: NewTeam) -> Result<(Team, SyncOutcome)> {
        self.writer
            .exec(move |conn| {
                let existing = teams
                    .filter(external_id.eq(new_team.external_id))
                    .select(TeamDB::as_select())
                    .first::<TeamDB>(conn)
                    .optional()
                    .into_core()?;

                match existing {
                    Some(mut team_db) => {
                        // Profile fields are unwatched; the standings block
                        // on the loaded row is preserved as-is.
                        team_db.name = new_team.name;
                        team_db.short_name = new_team.short_name;
                        team_db.tla = new_team.tla;
                        team_db.crest = new_team.crest;
                        team_db.venue = new_team.venue;
                        team_db.league_id = new_team.league_id;
                        team_db.updated_at = chrono::Utc::now().naive_utc();

                        diesel::update(teams.find(&team_db.id))
                            .set(&team_db)
                            .execute(conn)
                            .into_core()?;

                        Ok((team_db.into(), SyncOutcome::Unchanged))
                    }
                    None => {
                        let mut team_db: TeamDB = new_team.into();
                        team_db.id = uuid::Uuid::new_v4().to_string();

                        diesel::insert_into(teams::table)
                            .values(&team_db)
                            .execute(conn)
                            .into_core()?;

                        Ok((team_db.into(), SyncOutcome::Created))
                    }
                }
            })
            .await
    }

    async fn upsert_standing(&self, update: StandingUpdate) -> Result<(Team, SyncOutcome)> {
        self.writer
            .exec(move |conn| {
                let existing = teams
                    .filter(external_id.eq(update.team_external_id))
                    .select(TeamDB::as_select())
                    .first::<TeamDB>(conn)
                    .optional()
                    .into_core()?;

                match existing {
                    Some(mut team_db) => {
                        let stored: Team = team_db.clone().into();
                        let changed = standing_changed_fields(&stored, &update);

                        team_db.position = Some(update.position);
                        team_db.played_games = Some(update.played_games);
                        team_db.won = Some(update.won);
                        team_db.draw = Some(update.draw);
                        team_db.lost = Some(update.lost);
                        team_db.points = Some(update.points);
                        team_db.goals_for = Some(update.goals_for);
                        team_db.goals_against = Some(update.goals_against);
                        team_db.goal_difference = Some(update.goal_difference);
                        team_db.updated_at = chrono::Utc::now().naive_utc();

                        diesel::update(teams.find(&team_db.id))
                            .set(&team_db)
                            .execute(conn)
                            .into_core()?;

                        let outcome = if changed.is_empty() {
                            SyncOutcome::Unchanged
                        } else {
                            SyncOutcome::Updated(
                                changed.iter().map(|f| f.to_string()).collect(),
                            )
                        };
                        Ok((team_db.into(), outcome))
                    }
                    None => {
                        // Standings can arrive before the team profile sync.
                        let now = chrono::Utc::now().naive_utc();
                        let team_db = TeamDB {
                            id: uuid::Uuid::new_v4().to_string(),
                            external_id: update.team_external_id,
                            name: update.team_name,
                            short_name: update.team_short_name,
                            tla: None,
                            crest: None,
                            venue: None,
                            league_id: None,
                            position: Some(update.position),
                            played_games: Some(update.played_games),
                            won: Some(update.won),
                            draw: Some(update.draw),
                            lost: Some(update.lost),
                            points: Some(update.points),
                            goals_for: Some(update.goals_for),
                            goals_against: Some(update.goals_against),
                            goal_difference: Some(update.goal_difference),
                            created_at: now,
                            updated_at: now,
                        };

                        diesel::insert_into(teams::table)
                            .values(&team_db)
                            .execute(conn)
                            .into_core()?;

                        Ok((team_db.into(), SyncOutcome::Created))
                    }
                }
            })
            .await
    }

    fn get_by_id(&self, team_id: &str) -> Result<Option<Team>> {
        let mut conn = get_connection(&self.pool)?;

        let result = teams
            .select(TeamDB::as_select())
            .find(team_id)
            .first::<TeamDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(result.map(Team::from))
    }

    fn get_by_external_id(&self, external_id_param: i64) -> Result<Option<Team>> {
        let mut conn = get_connection(&self.pool)?;

        let result = teams
            .filter(external_id.eq(external_id_param))
            .select(TeamDB::as_select())
            .first::<TeamDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(result.map(Team::from))
    }

    fn list(&self) -> Result<Vec<Team>> {
        let mut conn = get_connection(&self.pool)?;

        let results = teams
            .select(TeamDB::as_select())
            .order(name.asc())
            .load::<TeamDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Team::from).collect())
    }
}
