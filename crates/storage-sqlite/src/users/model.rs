//! Database models for users and the follow relation.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use matchday_core::users::{NewUser, User};

/// Database model for users. Followed teams live in their own join
/// table and are stitched in by the repository.
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
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// One row of the user-to-team follow relation.
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::user_followed_teams)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FollowedTeamDB {
    pub user_id: String,
    pub team_id: String,
}

impl UserDB {
    pub fn into_domain(self, followed_team_ids: Vec<String>) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            followed_team_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<NewUser> for UserDB {
    fn from(domain: NewUser) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: String::new(), // assigned by the repository
            name: domain.name,
            email: domain.email,
            created_at: now,
            updated_at: now,
        }
    }
}
