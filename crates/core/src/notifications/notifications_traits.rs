//! Notification repository and service traits.

use async_trait::async_trait;

use super::notifications_model::{NewNotification, Notification};
use crate::errors::Result;

/// Trait defining the contract for Notification repository operations.
#[async_trait]
pub trait NotificationRepositoryTrait: Send + Sync {
    /// Appends a notification record.
    async fn create(&self, new_notification: NewNotification) -> Result<Notification>;

    /// Lists a user's notifications, newest first.
    fn list_by_user(&self, user_id: &str) -> Result<Vec<Notification>>;

    fn list_by_match(&self, match_id: &str) -> Result<Vec<Notification>>;
}

/// Read surface consumed by the server. Records are only ever created
/// by the dispatcher, through the repository trait.
pub trait NotificationServiceTrait: Send + Sync {
    fn list_user_notifications(&self, user_id: &str) -> Result<Vec<Notification>>;

    fn list_match_notifications(&self, match_id: &str) -> Result<Vec<Notification>>;
}
