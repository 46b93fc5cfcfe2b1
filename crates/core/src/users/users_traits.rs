//! User repository and service traits.

use async_trait::async_trait;

use super::users_model::{NewUser, User};
use crate::errors::Result;

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn create(&self, new_user: NewUser) -> Result<User>;

    fn get_by_id(&self, user_id: &str) -> Result<Option<User>>;

    fn list(&self) -> Result<Vec<User>>;

    /// Resolves the distinct ids of users following any of `team_ids`.
    ///
    /// A user following both sides of a match appears once.
    fn followers_of_teams(&self, team_ids: &[String]) -> Result<Vec<String>>;

    /// Adds `team_id` to the user's followed set. Idempotent.
    async fn follow_team(&self, user_id: &str, team_id: &str) -> Result<User>;

    /// Removes `team_id` from the user's followed set. Idempotent.
    async fn unfollow_team(&self, user_id: &str, team_id: &str) -> Result<User>;
}

/// User surface consumed by the server: seeding, follow management,
/// and reads. Follower resolution stays on the repository trait; only
/// the dispatcher holds it.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Creates a user after validating name and email.
    async fn create_user(&self, new_user: NewUser) -> Result<User>;

    fn get_user(&self, user_id: &str) -> Result<Option<User>>;

    fn list_users(&self) -> Result<Vec<User>>;

    async fn follow_team(&self, user_id: &str, team_id: &str) -> Result<User>;

    async fn unfollow_team(&self, user_id: &str, team_id: &str) -> Result<User>;
}
