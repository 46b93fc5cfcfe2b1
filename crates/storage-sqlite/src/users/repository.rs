use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{user_followed_teams, users};

use super::model::{FollowedTeamDB, UserDB};
use matchday_core::errors::Result;
use matchday_core::users::{NewUser, User, UserRepositoryTrait};

/// Repository for managing users and their followed teams
pub struct UserRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    fn followed_ids(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<String>> {
        user_followed_teams::table
            .filter(user_followed_teams::user_id.eq(user_id))
            .select(user_followed_teams::team_id)
            .order(user_followed_teams::team_id.asc())
            .load::<String>(conn)
            .into_core()
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn| {
                let followed = new_user.followed_team_ids.clone();
                let mut user_db: UserDB = new_user.into();
                user_db.id = uuid::Uuid::new_v4().to_string();

                diesel::insert_into(users::table)
                    .values(&user_db)
                    .execute(conn)
                    .into_core()?;

                let follow_rows: Vec<FollowedTeamDB> = followed
                    .iter()
                    .map(|team| FollowedTeamDB {
                        user_id: user_db.id.clone(),
                        team_id: team.clone(),
                    })
                    .collect();
                diesel::insert_into(user_followed_teams::table)
                    .values(&follow_rows)
                    .execute(conn)
                    .into_core()?;

                Ok(user_db.into_domain(followed))
            })
            .await
    }

    fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;

        let result = users::table
            .select(UserDB::as_select())
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .optional()
            .into_core()?;

        match result {
            Some(user_db) => {
                let followed = Self::followed_ids(&mut conn, user_id)?;
                Ok(Some(user_db.into_domain(followed)))
            }
            None => Ok(None),
        }
    }

    fn list(&self) -> Result<Vec<User>> {
        let mut conn = get_connection(&self.pool)?;

        let user_rows = users::table
            .select(UserDB::as_select())
            .order(users::name.asc())
            .load::<UserDB>(&mut conn)
            .into_core()?;

        let mut out = Vec::with_capacity(user_rows.len());
        for user_db in user_rows {
            let followed = Self::followed_ids(&mut conn, &user_db.id)?;
            out.push(user_db.into_domain(followed));
        }
        Ok(out)
    }

    fn followers_of_teams(&self, team_ids: &[String]) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)?;

        user_followed_teams::table
            .filter(user_followed_teams::team_id.eq_any(team_ids))
            .select(user_followed_teams::user_id)
            .distinct()
            .load::<String>(&mut conn)
            .into_core()
    }

    async fn follow_team(&self, user_id: &str, team_id: &str) -> Result<User> {
        let user_id = user_id.to_string();
        let team_id = team_id.to_string();
        self.writer
            .exec(move |conn| {
                let user_db = users::table
                    .select(UserDB::as_select())
                    .find(&user_id)
                    .first::<UserDB>(conn)
                    .into_core()?;

                diesel::insert_into(user_followed_teams::table)
                    .values(&FollowedTeamDB {
                        user_id: user_id.clone(),
                        team_id,
                    })
                    .on_conflict_do_nothing()
                    .execute(conn)
                    .into_core()?;

                let followed = Self::followed_ids(conn, &user_id)?;
                Ok(user_db.into_domain(followed))
            })
            .await
    }

    async fn unfollow_team(&self, user_id: &str, team_id: &str) -> Result<User> {
        let user_id = user_id.to_string();
        let team_id = team_id.to_string();
        self.writer
            .exec(move |conn| {
                let user_db = users::table
                    .select(UserDB::as_select())
                    .find(&user_id)
                    .first::<UserDB>(conn)
                    .into_core()?;

                diesel::delete(
                    user_followed_teams::table
                        .filter(user_followed_teams::user_id.eq(&user_id))
                        .filter(user_followed_teams::team_id.eq(&team_id)),
                )
                .execute(conn)
                .into_core()?;

                let followed = Self::followed_ids(conn, &user_id)?;
                Ok(user_db.into_domain(followed))
            })
            .await
    }
}
