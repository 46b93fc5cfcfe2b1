//! Match reconciliation.

use std::sync::Arc;

use log::{info, warn};

use crate::errors::Result;
use crate::events::{DomainEvent, EventBus};
use crate::leagues::LeagueRepositoryTrait;
use crate::matches::{MatchRepositoryTrait, NewMatch};
use crate::sync::{SyncOutcome, SyncReport};
use matchday_football_data::{MatchFilter, SourceClient};

pub struct MatchSync {
    source: Arc<dyn SourceClient>,
    leagues: Arc<dyn LeagueRepositoryTrait>,
    matches: Arc<dyn MatchRepositoryTrait>,
    bus: EventBus,
}

impl MatchSync {
    pub fn new(
        source: Arc<dyn SourceClient>,
        leagues: Arc<dyn LeagueRepositoryTrait>,
        matches: Arc<dyn MatchRepositoryTrait>,
        bus: EventBus,
    ) -> Self {
        Self {
            source,
            leagues,
            matches,
            bus,
        }
    }

    /// Fetches the filtered match list and applies one upsert per row.
    ///
    /// The stored league (if the league sync has run) provides display
    /// context; matches arriving before it are written without it and
    /// pick it up on a later cycle's silent refresh.
    pub async fn run(&self, filter: &MatchFilter) -> Result<SyncReport> {
        let remote_matches = self.source.fetch_matches(filter).await?;
        let league = self.leagues.list()?.into_iter().next();

        let mut report = SyncReport::default();
        for remote in remote_matches {
            let new_match = NewMatch::from_remote(remote, league.as_ref());
            let external_id = new_match.external_id;
            match self.matches.upsert(new_match).await {
                Ok((record, outcome)) => {
                    match &outcome {
                        SyncOutcome::Created => {
                            self.bus.publish(DomainEvent::new_match(record.clone()));
                        }
                        SyncOutcome::Updated(changed_fields) => {
                            self.bus.publish(DomainEvent::match_updated(
                                record.clone(),
                                changed_fields.clone(),
                            ));
                        }
                        SyncOutcome::Unchanged => {}
                    }
                    report.record(&outcome);
                }
                Err(e) => {
                    warn!("Skipping match row {}: {}", external_id, e);
                    report.skipped += 1;
                }
            }
        }

        info!(
            "Match sync: {} created, {} updated, {} unchanged, {} skipped",
            report.created, report.updated, report.unchanged, report.skipped
        );
        Ok(report)
    }
}
