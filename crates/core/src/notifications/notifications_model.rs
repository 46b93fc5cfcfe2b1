//! Domain model for persisted notifications.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An append-only notification record. Never mutated after creation;
/// durability lives here, the realtime channel is best-effort only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    /// Event kind wire name: new-match, match-updated, league-inserted.
    pub kind: String,
    pub message: String,
    pub team_ids: Vec<String>,
    pub match_id: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Model for appending a notification.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub user_id: String,
    pub kind: String,
    pub message: String,
    pub team_ids: Vec<String>,
    pub match_id: Option<String>,
}
