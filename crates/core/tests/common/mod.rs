//! In-memory repositories and a scripted source client for end-to-end
//! reconciliation tests. The diff logic is the same code production
//! storage runs; only persistence is swapped out.

// Each test binary uses a different subset of the fixtures.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use matchday_core::errors::{DatabaseError, Result};
use matchday_core::leagues::{League, LeagueRepositoryTrait, NewLeague};
use matchday_core::matches::{
    match_changed_fields, Match, MatchRepositoryTrait, NewMatch,
};
use matchday_core::notifications::{
    NewNotification, Notification, NotificationRepositoryTrait,
};
use matchday_core::sync::SyncOutcome;
use matchday_core::teams::{
    standing_changed_fields, NewTeam, StandingUpdate, Team, TeamRepositoryTrait,
};
use matchday_core::users::{NewUser, User, UserRepositoryTrait};
use matchday_football_data::{
    MatchFilter, RemoteCompetition, RemoteMatch, RemoteStandingRow, RemoteTeam, SourceClient,
    SourceError,
};

fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// ============================================================================
// Leagues
// ============================================================================

#[derive(Default)]
pub struct InMemoryLeagueRepository {
    rows: Mutex<HashMap<String, League>>,
}

#[async_trait]
impl LeagueRepositoryTrait for InMemoryLeagueRepository {
    async fn upsert(&self, new_league: NewLeague) -> Result<(League, SyncOutcome)> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows
            .values_mut()
            .find(|l| l.external_id == new_league.external_id)
        {
            existing.name = new_league.name;
            existing.country = new_league.country;
            existing.season = new_league.season;
            existing.updated_at = now();
            return Ok((existing.clone(), SyncOutcome::Unchanged));
        }
        let league = League {
            id: new_id(),
            external_id: new_league.external_id,
            name: new_league.name,
            country: new_league.country,
            season: new_league.season,
            team_ids: Vec::new(),
            created_at: now(),
            updated_at: now(),
        };
        rows.insert(league.id.clone(), league.clone());
        Ok((league, SyncOutcome::Created))
    }

    async fn set_team_ids(&self, league_id: &str, team_ids: Vec<String>) -> Result<League> {
        let mut rows = self.rows.lock().unwrap();
        let league = rows
            .get_mut(league_id)
            .ok_or_else(|| DatabaseError::NotFound(format!("league {league_id}")))?;
        league.team_ids = team_ids;
        league.updated_at = now();
        Ok(league.clone())
    }

    fn get_by_id(&self, league_id: &str) -> Result<Option<League>> {
        Ok(self.rows.lock().unwrap().get(league_id).cloned())
    }

    fn get_by_external_id(&self, external_id: i64) -> Result<Option<League>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|l| l.external_id == external_id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<League>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }
}

// ============================================================================
// Teams
// ============================================================================

#[derive(Default)]
pub struct InMemoryTeamRepository {
    rows: Mutex<HashMap<String, Team>>,
}

#[async_trait]
impl TeamRepositoryTrait for InMemoryTeamRepository {
    async fn upsert_profile(&self, new_team: NewTeam) -> Result<(Team, SyncOutcome)> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows
            .values_mut()
            .find(|t| t.external_id == new_team.external_id)
        {
            existing.name = new_team.name;
            existing.short_name = new_team.short_name;
            existing.tla = new_team.tla;
            existing.crest = new_team.crest;
            existing.venue = new_team.venue;
            existing.league_id = new_team.league_id;
            existing.updated_at = now();
            return Ok((existing.clone(), SyncOutcome::Unchanged));
        }
        let team = Team {
            id: new_id(),
            external_id: new_team.external_id,
            name: new_team.name,
            short_name: new_team.short_name,
            tla: new_team.tla,
            crest: new_team.crest,
            venue: new_team.venue,
            league_id: new_team.league_id,
            position: None,
            played_games: None,
            won: None,
            draw: None,
            lost: None,
            points: None,
            goals_for: None,
            goals_against: None,
            goal_difference: None,
            created_at: now(),
            updated_at: now(),
        };
        rows.insert(team.id.clone(), team.clone());
        Ok((team, SyncOutcome::Created))
    }

    async fn upsert_standing(&self, update: StandingUpdate) -> Result<(Team, SyncOutcome)> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows
            .values_mut()
            .find(|t| t.external_id == update.team_external_id)
        {
            let changed = standing_changed_fields(existing, &update);
            existing.position = Some(update.position);
            existing.played_games = Some(update.played_games);
            existing.won = Some(update.won);
            existing.draw = Some(update.draw);
            existing.lost = Some(update.lost);
            existing.points = Some(update.points);
            existing.goals_for = Some(update.goals_for);
            existing.goals_against = Some(update.goals_against);
            existing.goal_difference = Some(update.goal_difference);
            existing.updated_at = now();
            let outcome = if changed.is_empty() {
                SyncOutcome::Unchanged
            } else {
                SyncOutcome::Updated(changed.iter().map(|f| f.to_string()).collect())
            };
            return Ok((existing.clone(), outcome));
        }
        let team = Team {
            id: new_id(),
            external_id: update.team_external_id,
            name: update.team_name,
            short_name: update.team_short_name,
            tla: None,
            crest: None,
            venue: None,
            league_id: None,
            position: Some(update.position),
            played_games: Some(update.played_games),
            won: Some(update.won),
            draw: Some(update.draw),
            lost: Some(update.lost),
            points: Some(update.points),
            goals_for: Some(update.goals_for),
            goals_against: Some(update.goals_against),
            goal_difference: Some(update.goal_difference),
            created_at: now(),
            updated_at: now(),
        };
        rows.insert(team.id.clone(), team.clone());
        Ok((team, SyncOutcome::Created))
    }

    fn get_by_id(&self, team_id: &str) -> Result<Option<Team>> {
        Ok(self.rows.lock().unwrap().get(team_id).cloned())
    }

    fn get_by_external_id(&self, external_id: i64) -> Result<Option<Team>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|t| t.external_id == external_id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Team>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }
}

// ============================================================================
// Matches
// ============================================================================

#[derive(Default)]
pub struct InMemoryMatchRepository {
    rows: Mutex<HashMap<String, Match>>,
}

#[async_trait]
impl MatchRepositoryTrait for InMemoryMatchRepository {
    async fn upsert(&self, new_match: NewMatch) -> Result<(Match, SyncOutcome)> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows
            .values_mut()
            .find(|m| m.external_id == new_match.external_id)
        {
            let changed = match_changed_fields(existing, &new_match);
            existing.league_id = new_match.league_id;
            existing.home_team = new_match.home_team;
            existing.away_team = new_match.away_team;
            existing.display_name = new_match.display_name;
            existing.date = new_match.date;
            existing.status = new_match.status;
            existing.score_home = new_match.score_home;
            existing.score_away = new_match.score_away;
            existing.venue = new_match.venue;
            existing.referee = new_match.referee;
            existing.matchday = new_match.matchday;
            existing.updated_at = now();
            let outcome = if changed.is_empty() {
                SyncOutcome::Unchanged
            } else {
                SyncOutcome::Updated(changed.iter().map(|f| f.to_string()).collect())
            };
            return Ok((existing.clone(), outcome));
        }
        let record = Match {
            id: new_id(),
            external_id: new_match.external_id,
            league_id: new_match.league_id,
            home_team_external_id: new_match.home_team_external_id,
            away_team_external_id: new_match.away_team_external_id,
            home_team: new_match.home_team,
            away_team: new_match.away_team,
            display_name: new_match.display_name,
            date: new_match.date,
            status: new_match.status,
            score_home: new_match.score_home,
            score_away: new_match.score_away,
            venue: new_match.venue,
            referee: new_match.referee,
            matchday: new_match.matchday,
            created_at: now(),
            updated_at: now(),
        };
        rows.insert(record.id.clone(), record.clone());
        Ok((record, SyncOutcome::Created))
    }

    fn get_by_id(&self, match_id: &str) -> Result<Option<Match>> {
        Ok(self.rows.lock().unwrap().get(match_id).cloned())
    }

    fn get_by_external_id(&self, external_id: i64) -> Result<Option<Match>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|m| m.external_id == external_id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Match>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    fn list_by_league(&self, league_id: &str) -> Result<Vec<Match>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|m| m.league_id.as_deref() == Some(league_id))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User> {
        let user = User {
            id: new_id(),
            name: new_user.name,
            email: new_user.email,
            followed_team_ids: new_user.followed_team_ids,
            created_at: now(),
            updated_at: now(),
        };
        self.rows.lock().unwrap().push(user.clone());
        Ok(user)
    }

    fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<User>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn followers_of_teams(&self, team_ids: &[String]) -> Result<Vec<String>> {
        let rows = self.rows.lock().unwrap();
        let mut followers = Vec::new();
        for user in rows.iter() {
            if user.followed_team_ids.iter().any(|t| team_ids.contains(t))
                && !followers.contains(&user.id)
            {
                followers.push(user.id.clone());
            }
        }
        Ok(followers)
    }

    async fn follow_team(&self, user_id: &str, team_id: &str) -> Result<User> {
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| DatabaseError::NotFound(format!("user {user_id}")))?;
        if !user.followed_team_ids.iter().any(|t| t == team_id) {
            user.followed_team_ids.push(team_id.to_string());
            user.updated_at = now();
        }
        Ok(user.clone())
    }

    async fn unfollow_team(&self, user_id: &str, team_id: &str) -> Result<User> {
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| DatabaseError::NotFound(format!("user {user_id}")))?;
        user.followed_team_ids.retain(|t| t != team_id);
        user.updated_at = now();
        Ok(user.clone())
    }
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Default)]
pub struct InMemoryNotificationRepository {
    rows: Mutex<Vec<Notification>>,
}

#[async_trait]
impl NotificationRepositoryTrait for InMemoryNotificationRepository {
    async fn create(&self, new_notification: NewNotification) -> Result<Notification> {
        let notification = Notification {
            id: new_id(),
            user_id: new_notification.user_id,
            kind: new_notification.kind,
            message: new_notification.message,
            team_ids: new_notification.team_ids,
            match_id: new_notification.match_id,
            created_at: now(),
        };
        self.rows.lock().unwrap().push(notification.clone());
        Ok(notification)
    }

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Notification>> {
        let mut out: Vec<Notification> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        out.reverse();
        Ok(out)
    }

    fn list_by_match(&self, match_id: &str) -> Result<Vec<Notification>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.match_id.as_deref() == Some(match_id))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Scripted source
// ============================================================================

/// Source client fed with canned responses. Each reconciliation cycle
/// reads whatever the test installed last.
#[derive(Default)]
pub struct ScriptedSource {
    pub competition: Mutex<Option<RemoteCompetition>>,
    pub teams: Mutex<Vec<RemoteTeam>>,
    pub matches: Mutex<Vec<RemoteMatch>>,
    pub standings: Mutex<Vec<RemoteStandingRow>>,
    teams_failures: Mutex<u32>,
}

impl ScriptedSource {
    pub fn set_competition(&self, competition: RemoteCompetition) {
        *self.competition.lock().unwrap() = Some(competition);
    }

    pub fn set_teams(&self, teams: Vec<RemoteTeam>) {
        *self.teams.lock().unwrap() = teams;
    }

    /// Makes the next `count` team fetches fail with a provider error.
    pub fn fail_teams_fetches(&self, count: u32) {
        *self.teams_failures.lock().unwrap() = count;
    }

    pub fn set_matches(&self, matches: Vec<RemoteMatch>) {
        *self.matches.lock().unwrap() = matches;
    }

    pub fn set_standings(&self, standings: Vec<RemoteStandingRow>) {
        *self.standings.lock().unwrap() = standings;
    }
}

#[async_trait]
impl SourceClient for ScriptedSource {
    async fn fetch_competition(&self) -> std::result::Result<RemoteCompetition, SourceError> {
        self.competition
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| SourceError::ProviderError("no competition scripted".to_string()))
    }

    async fn fetch_teams(&self) -> std::result::Result<Vec<RemoteTeam>, SourceError> {
        let mut failures = self.teams_failures.lock().unwrap();
        if *failures > 0 {
            *failures -= 1;
            return Err(SourceError::ProviderError("scripted outage".to_string()));
        }
        Ok(self.teams.lock().unwrap().clone())
    }

    async fn fetch_matches(
        &self,
        _filter: &MatchFilter,
    ) -> std::result::Result<Vec<RemoteMatch>, SourceError> {
        Ok(self.matches.lock().unwrap().clone())
    }

    async fn fetch_standings(&self) -> std::result::Result<Vec<RemoteStandingRow>, SourceError> {
        Ok(self.standings.lock().unwrap().clone())
    }
}
