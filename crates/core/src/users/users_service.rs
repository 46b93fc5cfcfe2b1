use log::debug;
use std::sync::Arc;

use super::users_model::{NewUser, User};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::Result;

/// Service for managing users and the follow relation.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        debug!("Creating user '{}'", new_user.name);
        self.repository.create(new_user).await
    }

    fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        self.repository.get_by_id(user_id)
    }

    fn list_users(&self) -> Result<Vec<User>> {
        self.repository.list()
    }

    async fn follow_team(&self, user_id: &str, team_id: &str) -> Result<User> {
        self.repository.follow_team(user_id, team_id).await
    }

    async fn unfollow_team(&self, user_id: &str, team_id: &str) -> Result<User> {
        self.repository.unfollow_team(user_id, team_id).await
    }
}
