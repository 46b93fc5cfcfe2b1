//! Fan-out of domain events to notifications and realtime pushes.
//!
//! Match events produce one persisted notification plus one push per
//! follower. Table updates are transient and push-only. League inserts
//! are broadcast to every live connection.

use std::sync::Arc;

use async_trait::async_trait;
use log::{error, warn};
use serde_json::json;

use super::notifications_model::NewNotification;
use super::notifications_traits::NotificationRepositoryTrait;
use super::push::RealtimePush;
use crate::errors::Result;
use crate::events::{DomainEvent, EventKind, EventListener};
use crate::matches::Match;
use crate::teams::{Team, TeamRepositoryTrait};
use crate::users::UserRepositoryTrait;

pub struct NotificationDispatcher {
    teams: Arc<dyn TeamRepositoryTrait>,
    users: Arc<dyn UserRepositoryTrait>,
    notifications: Arc<dyn NotificationRepositoryTrait>,
    push: Arc<dyn RealtimePush>,
}

impl NotificationDispatcher {
    pub fn new(
        teams: Arc<dyn TeamRepositoryTrait>,
        users: Arc<dyn UserRepositoryTrait>,
        notifications: Arc<dyn NotificationRepositoryTrait>,
        push: Arc<dyn RealtimePush>,
    ) -> Self {
        Self {
            teams,
            users,
            notifications,
            push,
        }
    }

    /// Internal ids of the stored teams on both sides of the match.
    /// A side not yet synced is skipped with a warning.
    fn match_team_ids(&self, record: &Match) -> Result<Vec<String>> {
        let mut ids = Vec::with_capacity(2);
        for external_id in [record.home_team_external_id, record.away_team_external_id] {
            match self.teams.get_by_external_id(external_id)? {
                Some(team) => ids.push(team.id),
                None => warn!(
                    "Match '{}' references unknown team {}",
                    record.display_name, external_id
                ),
            }
        }
        Ok(ids)
    }

    /// Persists one notification and pushes one frame per follower.
    /// A failure for one user never blocks delivery to the rest.
    async fn notify_followers(
        &self,
        kind: EventKind,
        message: String,
        team_ids: Vec<String>,
        match_id: Option<String>,
        payload: serde_json::Value,
    ) -> Result<()> {
        let followers = self.users.followers_of_teams(&team_ids)?;
        for user_id in followers {
            let created = self
                .notifications
                .create(NewNotification {
                    user_id: user_id.clone(),
                    kind: kind.as_str().to_string(),
                    message: message.clone(),
                    team_ids: team_ids.clone(),
                    match_id: match_id.clone(),
                })
                .await;
            if let Err(e) = created {
                error!("Failed to persist '{}' notification for {}: {}", kind, user_id, e);
            }
            if let Err(e) = self
                .push
                .push_to_user(&user_id, kind, payload.clone())
                .await
            {
                error!("Failed to push '{}' to {}: {}", kind, user_id, e);
            }
        }
        Ok(())
    }

    async fn on_new_match(&self, record: &Match) -> Result<()> {
        let payload = json!({
            "homeTeam": record.home_team,
            "awayTeam": record.away_team,
        });
        let message = format!("New match: {} x {}", record.home_team, record.away_team);
        let team_ids = self.match_team_ids(record)?;
        self.notify_followers(
            EventKind::NewMatch,
            message,
            team_ids,
            Some(record.id.clone()),
            payload,
        )
        .await
    }

    async fn on_match_updated(&self, record: &Match, changed_fields: &[String]) -> Result<()> {
        let payload = json!({
            "homeTeam": record.home_team,
            "awayTeam": record.away_team,
            "score": { "home": record.score_home, "away": record.score_away },
            "status": record.status,
            "changedFields": changed_fields,
        });
        let message = match (record.score_home, record.score_away) {
            (Some(home), Some(away)) => format!(
                "Match updated: {} {} x {} {}",
                record.home_team, home, away, record.away_team
            ),
            _ => format!(
                "Match updated: {} x {}",
                record.home_team, record.away_team
            ),
        };
        let team_ids = self.match_team_ids(record)?;
        self.notify_followers(
            EventKind::MatchUpdated,
            message,
            team_ids,
            Some(record.id.clone()),
            payload,
        )
        .await
    }

    /// Table updates are transient: pushed to followers, never persisted.
    async fn on_table_updated(&self, team: &Team) -> Result<()> {
        let payload = json!({
            "position": team.position,
            "points": team.points,
            "playedGames": team.played_games,
            "won": team.won,
            "draw": team.draw,
            "lost": team.lost,
            "goalDifference": team.goal_difference,
            "goalsAgainst": team.goals_against,
            "goalsFor": team.goals_for,
            "leagueId": team.league_id,
        });
        let followers = self.users.followers_of_teams(&[team.id.clone()])?;
        for user_id in followers {
            if let Err(e) = self
                .push
                .push_to_user(&user_id, EventKind::TableUpdated, payload.clone())
                .await
            {
                error!("Failed to push 'table-updated' to {}: {}", user_id, e);
            }
        }
        Ok(())
    }
}

#[async_trait]
impl EventListener for NotificationDispatcher {
    fn name(&self) -> &str {
        "notification-dispatcher"
    }

    async fn handle(&self, event: &DomainEvent) -> Result<()> {
        match event {
            DomainEvent::NewMatch(record) => self.on_new_match(record).await,
            DomainEvent::MatchUpdated {
                record,
                changed_fields,
            } => self.on_match_updated(record, changed_fields).await,
            DomainEvent::TableUpdated { team, .. } => self.on_table_updated(team).await,
            DomainEvent::LeagueInserted(league) => {
                self.push
                    .broadcast(EventKind::LeagueInserted, serde_json::to_value(league)?)
                    .await
            }
        }
    }
}
