//! Reconciliation outcomes.

use serde::{Deserialize, Serialize};

/// What an upsert did to the stored record.
///
/// `Updated` carries the watched fields that changed; a write that only
/// touched cosmetic fields reports `Unchanged`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SyncOutcome {
    Created,
    Updated(Vec<String>),
    Unchanged,
}

impl SyncOutcome {
    /// Created and Updated writes emit a domain event; Unchanged is silent.
    pub fn triggers_event(&self) -> bool {
        !matches!(self, SyncOutcome::Unchanged)
    }
}

/// Tally of one reconciliation cycle, logged at the end of each run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Provider rows dropped during normalization or rejected by the store.
    pub skipped: usize,
}

impl SyncReport {
    pub fn record(&mut self, outcome: &SyncOutcome) {
        match outcome {
            SyncOutcome::Created => self.created += 1,
            SyncOutcome::Updated(_) => self.updated += 1,
            SyncOutcome::Unchanged => self.unchanged += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.created + self.updated + self.unchanged + self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unchanged_is_silent() {
        assert!(SyncOutcome::Created.triggers_event());
        assert!(SyncOutcome::Updated(vec!["status".to_string()]).triggers_event());
        assert!(!SyncOutcome::Unchanged.triggers_event());
    }

    #[test]
    fn report_tallies_outcomes() {
        let mut report = SyncReport::default();
        report.record(&SyncOutcome::Created);
        report.record(&SyncOutcome::Updated(vec!["score".to_string()]));
        report.record(&SyncOutcome::Unchanged);
        report.skipped += 1;
        assert_eq!(report.created, 1);
        assert_eq!(report.updated, 1);
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.total(), 4);
    }
}
