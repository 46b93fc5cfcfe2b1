use std::sync::Arc;

use super::leagues_model::League;
use super::leagues_traits::{LeagueRepositoryTrait, LeagueServiceTrait};
use crate::errors::Result;

/// Read-side service over the league repository.
pub struct LeagueService {
    repository: Arc<dyn LeagueRepositoryTrait>,
}

impl LeagueService {
    pub fn new(repository: Arc<dyn LeagueRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl LeagueServiceTrait for LeagueService {
    fn get_league(&self, league_id: &str) -> Result<Option<League>> {
        self.repository.get_by_id(league_id)
    }

    fn list_leagues(&self) -> Result<Vec<League>> {
        self.repository.list()
    }
}
