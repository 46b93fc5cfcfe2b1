use std::sync::Arc;

use super::notifications_model::Notification;
use super::notifications_traits::{NotificationRepositoryTrait, NotificationServiceTrait};
use crate::errors::Result;

/// Read-side service over the append-only notification log.
pub struct NotificationService {
    repository: Arc<dyn NotificationRepositoryTrait>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl NotificationServiceTrait for NotificationService {
    fn list_user_notifications(&self, user_id: &str) -> Result<Vec<Notification>> {
        self.repository.list_by_user(user_id)
    }

    fn list_match_notifications(&self, match_id: &str) -> Result<Vec<Notification>> {
        self.repository.list_by_match(match_id)
    }
}
