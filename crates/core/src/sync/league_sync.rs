//! League reconciliation: competition header plus member teams.

use std::sync::Arc;

use log::{info, warn};

use crate::errors::{Error, Result};
use crate::events::{DomainEvent, EventBus};
use crate::leagues::{League, LeagueRepositoryTrait, NewLeague};
use crate::sync::{SyncOutcome, SyncReport};
use crate::teams::{NewTeam, TeamRepositoryTrait};
use matchday_football_data::SourceClient;

/// Two-level reconciler. The league shell is upserted first so member
/// teams can carry its id; the membership list is written back after
/// every team row has been applied.
pub struct LeagueSync {
    source: Arc<dyn SourceClient>,
    leagues: Arc<dyn LeagueRepositoryTrait>,
    teams: Arc<dyn TeamRepositoryTrait>,
    bus: EventBus,
}

impl LeagueSync {
    pub fn new(
        source: Arc<dyn SourceClient>,
        leagues: Arc<dyn LeagueRepositoryTrait>,
        teams: Arc<dyn TeamRepositoryTrait>,
        bus: EventBus,
    ) -> Self {
        Self {
            source,
            leagues,
            teams,
            bus,
        }
    }

    pub async fn run(&self) -> Result<SyncReport> {
        let competition = self.source.fetch_competition().await?;
        let (league, league_outcome) = self.leagues.upsert(NewLeague::from(&competition)).await?;

        let mut report = SyncReport::default();
        report.record(&league_outcome);
        let inserted = league_outcome == SyncOutcome::Created;

        // A created league is announced even when the member sync fails
        // partway; the next cycle would report it as Unchanged and never
        // broadcast.
        let league = match self.sync_members(league, &mut report).await {
            Ok(league) => league,
            Err((league, e)) => {
                if inserted {
                    self.bus.publish(DomainEvent::league_inserted(league));
                }
                return Err(e);
            }
        };

        if inserted {
            self.bus.publish(DomainEvent::league_inserted(league.clone()));
        }

        info!(
            "League sync '{}': {} created, {} updated, {} unchanged, {} skipped",
            league.name, report.created, report.updated, report.unchanged, report.skipped
        );
        Ok(report)
    }

    /// Upserts every member team with the league back-reference, then
    /// writes the resolved membership list back to the league.
    async fn sync_members(
        &self,
        league: League,
        report: &mut SyncReport,
    ) -> std::result::Result<League, (League, Error)> {
        let remote_teams = match self.source.fetch_teams().await {
            Ok(rows) => rows,
            Err(e) => return Err((league, e.into())),
        };

        let mut member_ids = Vec::with_capacity(remote_teams.len());
        for remote in remote_teams {
            let mut new_team = NewTeam::from(remote);
            new_team.league_id = Some(league.id.clone());
            match self.teams.upsert_profile(new_team).await {
                Ok((team, outcome)) => {
                    report.record(&outcome);
                    member_ids.push(team.id);
                }
                Err(e) => {
                    warn!("Skipping team row in league '{}': {}", league.name, e);
                    report.skipped += 1;
                }
            }
        }

        match self.leagues.set_team_ids(&league.id, member_ids).await {
            Ok(updated) => Ok(updated),
            Err(e) => Err((league, e)),
        }
    }
}
