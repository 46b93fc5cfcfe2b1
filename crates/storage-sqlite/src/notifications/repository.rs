use async_trait::async_trait;
use diesel::prelude::*;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::notifications;
use crate::schema::notifications::dsl::*;

use super::model::NotificationDB;
use matchday_core::errors::Result;
use matchday_core::notifications::{
    NewNotification, Notification, NotificationRepositoryTrait,
};

/// Repository for the append-only notification log
pub struct NotificationRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl NotificationRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl NotificationRepositoryTrait for NotificationRepository {
    async fn create(&self, new_notification: NewNotification) -> Result<Notification> {
        self.writer
            .exec(move |conn| {
                let mut notification_db: NotificationDB = new_notification.into();
                notification_db.id = uuid::Uuid::new_v4().to_string();

                diesel::insert_into(notifications::table)
                    .values(&notification_db)
                    .execute(conn)
                    .into_core()?;

                Ok(notification_db.into())
            })
            .await
    }

    fn list_by_user(&self, user_id_param: &str) -> Result<Vec<Notification>> {
        let mut conn = get_connection(&self.pool)?;

        let results = notifications
            .filter(user_id.eq(user_id_param))
            .select(NotificationDB::as_select())
            .order(created_at.desc())
            .load::<NotificationDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Notification::from).collect())
    }

    fn list_by_match(&self, match_id_param: &str) -> Result<Vec<Notification>> {
        let mut conn = get_connection(&self.pool)?;

        let results = notifications
            .filter(match_id.eq(match_id_param))
            .select(NotificationDB::as_select())
            .order(created_at.desc())
            .load::<NotificationDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Notification::from).collect())
    }
}
