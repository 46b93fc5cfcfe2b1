//! Domain event types.

use serde::{Deserialize, Serialize};

use crate::leagues::League;
use crate::matches::Match;
use crate::teams::Team;

/// The event names carried on the bus and on the realtime wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    NewMatch,
    MatchUpdated,
    TableUpdated,
    LeagueInserted,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::NewMatch,
        EventKind::MatchUpdated,
        EventKind::TableUpdated,
        EventKind::LeagueInserted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::NewMatch => "new-match",
            EventKind::MatchUpdated => "match-updated",
            EventKind::TableUpdated => "table-updated",
            EventKind::LeagueInserted => "league-inserted",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain events emitted by reconcilers after successful upserts.
///
/// These events represent facts about detected changes. The notification
/// dispatcher (and any other registered listener) translates them into
/// persisted records and realtime pushes.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DomainEvent {
    /// A match was seen for the first time.
    NewMatch(Match),

    /// A watched field of a stored match changed.
    MatchUpdated {
        record: Match,
        changed_fields: Vec<String>,
    },

    /// A team's standings block changed (or was first populated).
    TableUpdated {
        team: Team,
        changed_fields: Vec<String>,
    },

    /// A league record was created for the first time.
    LeagueInserted(League),
}

impl DomainEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            DomainEvent::NewMatch(_) => EventKind::NewMatch,
            DomainEvent::MatchUpdated { .. } => EventKind::MatchUpdated,
            DomainEvent::TableUpdated { .. } => EventKind::TableUpdated,
            DomainEvent::LeagueInserted(_) => EventKind::LeagueInserted,
        }
    }

    pub fn new_match(record: Match) -> Self {
        Self::NewMatch(record)
    }

    pub fn match_updated(record: Match, changed_fields: Vec<String>) -> Self {
        Self::MatchUpdated {
            record,
            changed_fields,
        }
    }

    pub fn table_updated(team: Team, changed_fields: Vec<String>) -> Self {
        Self::TableUpdated {
            team,
            changed_fields,
        }
    }

    pub fn league_inserted(league: League) -> Self {
        Self::LeagueInserted(league)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::MatchStatus;
    use chrono::NaiveDateTime;

    fn sample_match() -> Match {
        let now = NaiveDateTime::default();
        Match {
            id: "m-1".to_string(),
            external_id: 555,
            league_id: None,
            home_team_external_id: 1,
            away_team_external_id: 2,
            home_team: "Flamengo".to_string(),
            away_team: "Vasco".to_string(),
            display_name: "Flamengo x Vasco".to_string(),
            date: now,
            status: MatchStatus::Scheduled,
            score_home: None,
            score_away: None,
            venue: None,
            referee: None,
            matchday: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn event_kind_wire_names() {
        assert_eq!(EventKind::NewMatch.as_str(), "new-match");
        assert_eq!(EventKind::MatchUpdated.as_str(), "match-updated");
        assert_eq!(EventKind::TableUpdated.as_str(), "table-updated");
        assert_eq!(EventKind::LeagueInserted.as_str(), "league-inserted");
        for kind in EventKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::json!(kind.as_str()));
        }
    }

    #[test]
    fn match_updated_serializes_with_kebab_case_tag() {
        let event = DomainEvent::match_updated(
            sample_match(),
            vec!["status".to_string(), "score".to_string()],
        );
        assert_eq!(event.kind(), EventKind::MatchUpdated);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "match-updated");
        assert_eq!(json["record"]["externalId"], 555);
        assert_eq!(json["changed_fields"][0], "status");
    }
}
