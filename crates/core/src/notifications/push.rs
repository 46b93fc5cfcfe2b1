//! Realtime push seam.
//!
//! The dispatcher pushes through this trait; the server implements it on
//! top of its websocket channel registry. Push delivery is best-effort,
//! the persisted notification is the durable record.

use async_trait::async_trait;

use crate::errors::Result;
use crate::events::EventKind;

#[async_trait]
pub trait RealtimePush: Send + Sync {
    /// Pushes one frame to a single user's open connections.
    async fn push_to_user(
        &self,
        user_id: &str,
        kind: EventKind,
        payload: serde_json::Value,
    ) -> Result<()>;

    /// Pushes one frame to every open connection.
    async fn broadcast(&self, kind: EventKind, payload: serde_json::Value) -> Result<()>;
}

/// One recorded push. `recipient` is None for broadcasts.
#[derive(Clone, Debug)]
pub struct PushRecord {
    pub recipient: Option<String>,
    pub kind: EventKind,
    pub payload: serde_json::Value,
}

/// Recording test double. Pushes to user ids listed in `fail_for` return
/// an error, everything is recorded either way.
#[derive(Default)]
pub struct MockRealtimePush {
    records: std::sync::Mutex<Vec<PushRecord>>,
    fail_for: std::sync::Mutex<std::collections::HashSet<String>>,
}

impl MockRealtimePush {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_for_user(&self, user_id: &str) {
        self.fail_for.lock().unwrap().insert(user_id.to_string());
    }

    pub fn records(&self) -> Vec<PushRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn records_for_user(&self, user_id: &str) -> Vec<PushRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.recipient.as_deref() == Some(user_id))
            .collect()
    }
}

#[async_trait]
impl RealtimePush for MockRealtimePush {
    async fn push_to_user(
        &self,
        user_id: &str,
        kind: EventKind,
        payload: serde_json::Value,
    ) -> Result<()> {
        let should_fail = self.fail_for.lock().unwrap().contains(user_id);
        self.records.lock().unwrap().push(PushRecord {
            recipient: Some(user_id.to_string()),
            kind,
            payload,
        });
        if should_fail {
            return Err(crate::errors::Error::Realtime(format!(
                "simulated push failure for user {user_id}"
            )));
        }
        Ok(())
    }

    async fn broadcast(&self, kind: EventKind, payload: serde_json::Value) -> Result<()> {
        self.records.lock().unwrap().push(PushRecord {
            recipient: None,
            kind,
            payload,
        });
        Ok(())
    }
}
