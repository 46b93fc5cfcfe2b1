//! Database model for notifications.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use matchday_core::notifications::{NewNotification, Notification};

/// Database model for notifications. The related team ids are stored as
/// a JSON array in a text column.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::notifications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NotificationDB {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub message: String,
    pub team_ids: String,
    pub match_id: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<NotificationDB> for Notification {
    fn from(db: NotificationDB) -> Self {
        let team_ids = serde_json::from_str(&db.team_ids).unwrap_or_default();
        Self {
            id: db.id,
            user_id: db.user_id,
            kind: db.kind,
            message: db.message,
            team_ids,
            match_id: db.match_id,
            created_at: db.created_at,
        }
    }
}

impl From<NewNotification> for NotificationDB {
    fn from(domain: NewNotification) -> Self {
        Self {
            id: String::new(), // assigned by the repository
            user_id: domain.user_id,
            kind: domain.kind,
            message: domain.message,
            team_ids: serde_json::to_string(&domain.team_ids)
                .unwrap_or_else(|_| "[]".to_string()),
            match_id: domain.match_id,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
