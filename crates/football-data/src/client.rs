//! HTTP client for the football-data.org v4 API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::errors::SourceError;
use crate::models::{
    self, RawCompetition, RawMatchesResponse, RawStandingsResponse, RawTeamsResponse,
    RemoteCompetition, RemoteMatch, RemoteStandingRow, RemoteTeam,
};

pub const DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4";

/// Bounded request timeout; a fetch exceeding it fails the cycle.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Optional filters for the competition matches endpoint.
#[derive(Clone, Debug, Default)]
pub struct MatchFilter {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub status: Option<String>,
    pub matchday: Option<i32>,
}

/// Read-only boundary to the external data provider.
///
/// Reconcilers depend on this trait so tests can feed canned snapshots.
#[async_trait]
pub trait SourceClient: Send + Sync {
    async fn fetch_competition(&self) -> Result<RemoteCompetition, SourceError>;
    async fn fetch_teams(&self) -> Result<Vec<RemoteTeam>, SourceError>;
    async fn fetch_matches(&self, filter: &MatchFilter) -> Result<Vec<RemoteMatch>, SourceError>;
    async fn fetch_standings(&self) -> Result<Vec<RemoteStandingRow>, SourceError>;
}

/// Client for one configured competition and season.
pub struct FootballDataClient {
    client: Client,
    base_url: String,
    token: String,
    competition: String,
    season: Option<i32>,
}

impl FootballDataClient {
    pub fn new(base_url: &str, token: String, competition: String, season: Option<i32>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            competition,
            season,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("X-Auth-Token", &self.token)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SourceError::RateLimited);
        }
        if !response.status().is_success() {
            return Err(SourceError::ProviderError(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| SourceError::MalformedRecord(e.to_string()))
    }

    fn season_query(&self) -> Vec<(&'static str, String)> {
        self.season
            .map(|s| vec![("season", s.to_string())])
            .unwrap_or_default()
    }
}

#[async_trait]
impl SourceClient for FootballDataClient {
    async fn fetch_competition(&self) -> Result<RemoteCompetition, SourceError> {
        let raw: RawCompetition = self
            .fetch(&format!("/competitions/{}", self.competition), &[])
            .await?;
        Ok(models::normalize_competition(raw))
    }

    async fn fetch_teams(&self) -> Result<Vec<RemoteTeam>, SourceError> {
        let raw: RawTeamsResponse = self
            .fetch(
                &format!("/competitions/{}/teams", self.competition),
                &self.season_query(),
            )
            .await?;
        Ok(raw.teams.into_iter().filter_map(models::normalize_team).collect())
    }

    async fn fetch_matches(&self, filter: &MatchFilter) -> Result<Vec<RemoteMatch>, SourceError> {
        let mut query = self.season_query();
        if let Some(from) = filter.date_from {
            query.push(("dateFrom", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = filter.date_to {
            query.push(("dateTo", to.format("%Y-%m-%d").to_string()));
        }
        if let Some(status) = &filter.status {
            query.push(("status", status.clone()));
        }
        if let Some(matchday) = filter.matchday {
            query.push(("matchday", matchday.to_string()));
        }

        let raw: RawMatchesResponse = self
            .fetch(&format!("/competitions/{}/matches", self.competition), &query)
            .await?;
        Ok(raw
            .matches
            .into_iter()
            .filter_map(models::normalize_match)
            .collect())
    }

    async fn fetch_standings(&self) -> Result<Vec<RemoteStandingRow>, SourceError> {
        let raw: RawStandingsResponse = self
            .fetch(
                &format!("/competitions/{}/standings", self.competition),
                &self.season_query(),
            )
            .await?;

        // The provider returns several tables (TOTAL, HOME, AWAY); the
        // overall table is the one reconciliation watches.
        let table = raw
            .standings
            .into_iter()
            .find(|s| s.kind.as_deref() == Some("TOTAL"))
            .map(|s| s.table)
            .unwrap_or_default();

        Ok(table
            .into_iter()
            .filter_map(models::normalize_standing_row)
            .collect())
    }
}
