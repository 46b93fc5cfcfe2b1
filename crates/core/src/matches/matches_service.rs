use std::sync::Arc;

use super::matches_model::Match;
use super::matches_traits::{MatchRepositoryTrait, MatchServiceTrait};
use crate::errors::Result;

/// Read-side service over the match repository.
pub struct MatchService {
    repository: Arc<dyn MatchRepositoryTrait>,
}

impl MatchService {
    pub fn new(repository: Arc<dyn MatchRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl MatchServiceTrait for MatchService {
    fn get_match(&self, match_id: &str) -> Result<Option<Match>> {
        self.repository.get_by_id(match_id)
    }

    fn list_matches(&self) -> Result<Vec<Match>> {
        self.repository.list()
    }

    fn list_league_matches(&self, league_id: &str) -> Result<Vec<Match>> {
        self.repository.list_by_league(league_id)
    }
}
