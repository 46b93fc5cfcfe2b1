//! Standings reconciliation.

use std::sync::Arc;

use log::{info, warn};

use crate::errors::Result;
use crate::events::{DomainEvent, EventBus};
use crate::sync::{SyncOutcome, SyncReport};
use crate::teams::{StandingUpdate, TeamRepositoryTrait, WATCHED_STANDING_FIELDS};
use matchday_football_data::SourceClient;

pub struct StandingSync {
    source: Arc<dyn SourceClient>,
    teams: Arc<dyn TeamRepositoryTrait>,
    bus: EventBus,
}

impl StandingSync {
    pub fn new(
        source: Arc<dyn SourceClient>,
        teams: Arc<dyn TeamRepositoryTrait>,
        bus: EventBus,
    ) -> Self {
        Self { source, teams, bus }
    }

    /// Applies the current table row by row. A team's first standings
    /// block reports every watched field as changed.
    pub async fn run(&self) -> Result<SyncReport> {
        let rows = self.source.fetch_standings().await?;

        let mut report = SyncReport::default();
        for row in rows {
            let update = StandingUpdate::from(row);
            let team_external_id = update.team_external_id;
            match self.teams.upsert_standing(update).await {
                Ok((team, outcome)) => {
                    match &outcome {
                        SyncOutcome::Created => {
                            let changed_fields = WATCHED_STANDING_FIELDS
                                .iter()
                                .map(|f| f.to_string())
                                .collect();
                            self.bus
                                .publish(DomainEvent::table_updated(team.clone(), changed_fields));
                        }
                        SyncOutcome::Updated(changed_fields) => {
                            self.bus.publish(DomainEvent::table_updated(
                                team.clone(),
                                changed_fields.clone(),
                            ));
                        }
                        SyncOutcome::Unchanged => {}
                    }
                    report.record(&outcome);
                }
                Err(e) => {
                    warn!("Skipping standings row for team {}: {}", team_external_id, e);
                    report.skipped += 1;
                }
            }
        }

        info!(
            "Standing sync: {} created, {} updated, {} unchanged, {} skipped",
            report.created, report.updated, report.unchanged, report.skipped
        );
        Ok(report)
    }
}
