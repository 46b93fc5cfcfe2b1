use std::sync::Arc;

use super::teams_model::Team;
use super::teams_traits::{TeamRepositoryTrait, TeamServiceTrait};
use crate::errors::Result;

/// Read-side service over the team repository.
pub struct TeamService {
    repository: Arc<dyn TeamRepositoryTrait>,
}

impl TeamService {
    pub fn new(repository: Arc<dyn TeamRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl TeamServiceTrait for TeamService {
    fn get_team(&self, team_id: &str) -> Result<Option<Team>> {
        self.repository.get_by_id(team_id)
    }

    fn list_teams(&self) -> Result<Vec<Team>> {
        self.repository.list()
    }
}
