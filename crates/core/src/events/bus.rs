//! In-process event bus.
//!
//! A single dispatch worker drains an unbounded channel, so listeners
//! observe events in exact publish order. Listener failures are logged
//! and never abort delivery to the remaining listeners.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use tokio::sync::{mpsc, oneshot, RwLock};

use crate::errors::Result;
use crate::events::{DomainEvent, EventKind};

/// A consumer of domain events. Registered per event kind; a listener
/// only sees the kinds it subscribed to.
#[async_trait]
pub trait EventListener: Send + Sync {
    /// Stable name used in dispatch logs.
    fn name(&self) -> &str;

    async fn handle(&self, event: &DomainEvent) -> Result<()>;
}

enum BusMessage {
    Event(DomainEvent),
    /// Resolves once every previously published event has been handled.
    Flush(oneshot::Sender<()>),
}

type ListenerMap = HashMap<EventKind, Vec<Arc<dyn EventListener>>>;

/// Handle to the bus. Cloning is cheap; all clones feed the same worker.
#[derive(Clone)]
pub struct EventBus {
    tx: mpsc::UnboundedSender<BusMessage>,
    listeners: Arc<RwLock<ListenerMap>>,
}

impl EventBus {
    /// Spawns the dispatch worker and returns the handle.
    pub fn start() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let listeners: Arc<RwLock<ListenerMap>> = Arc::new(RwLock::new(HashMap::new()));
        tokio::spawn(dispatch_loop(rx, listeners.clone()));
        Self { tx, listeners }
    }

    /// Registers `listener` for each of `kinds`, preserving registration
    /// order within a kind.
    pub async fn subscribe(&self, kinds: &[EventKind], listener: Arc<dyn EventListener>) {
        let mut map = self.listeners.write().await;
        for kind in kinds {
            map.entry(*kind).or_default().push(listener.clone());
        }
    }

    /// Enqueues an event. Returns immediately; delivery happens on the
    /// dispatch worker.
    pub fn publish(&self, event: DomainEvent) {
        if self.tx.send(BusMessage::Event(event)).is_err() {
            error!("Event bus worker is gone, dropping event");
        }
    }

    /// Waits until every event published before this call has been
    /// delivered to all its listeners.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.tx.send(BusMessage::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.await;
        }
    }
}

async fn dispatch_loop(
    mut rx: mpsc::UnboundedReceiver<BusMessage>,
    listeners: Arc<RwLock<ListenerMap>>,
) {
    while let Some(message) = rx.recv().await {
        match message {
            BusMessage::Event(event) => {
                let kind = event.kind();
                let snapshot = listeners
                    .read()
                    .await
                    .get(&kind)
                    .cloned()
                    .unwrap_or_default();
                if snapshot.is_empty() {
                    debug!("No listeners registered for '{}'", kind);
                    continue;
                }
                for listener in snapshot {
                    if let Err(e) = listener.handle(&event).await {
                        error!("Listener '{}' failed on '{}': {}", listener.name(), kind, e);
                    }
                }
            }
            BusMessage::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
    debug!("Event bus channel closed, dispatch loop exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::leagues::League;
    use chrono::NaiveDateTime;
    use std::sync::Mutex;

    fn sample_league(name: &str) -> League {
        let now = NaiveDateTime::default();
        League {
            id: format!("league-{name}"),
            external_id: 2013,
            name: name.to_string(),
            country: "Brazil".to_string(),
            season: "2026".to_string(),
            team_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    struct CollectingListener {
        name: String,
        seen: Mutex<Vec<DomainEvent>>,
    }

    impl CollectingListener {
        fn new(name: &str) -> Arc<Self> {
            Arc::new(Self {
                name: name.to_string(),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn seen_kinds(&self) -> Vec<EventKind> {
            self.seen.lock().unwrap().iter().map(|e| e.kind()).collect()
        }
    }

    #[async_trait]
    impl EventListener for CollectingListener {
        fn name(&self) -> &str {
            &self.name
        }

        async fn handle(&self, event: &DomainEvent) -> Result<()> {
            self.seen.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    struct FailingListener;

    #[async_trait]
    impl EventListener for FailingListener {
        fn name(&self) -> &str {
            "failing"
        }

        async fn handle(&self, _event: &DomainEvent) -> Result<()> {
            Err(Error::Unexpected("simulated listener failure".to_string()))
        }
    }

    #[tokio::test]
    async fn delivers_only_subscribed_kinds_in_publish_order() {
        let bus = EventBus::start();
        let listener = CollectingListener::new("collector");
        bus.subscribe(&[EventKind::LeagueInserted], listener.clone())
            .await;

        bus.publish(DomainEvent::league_inserted(sample_league("a")));
        bus.publish(DomainEvent::league_inserted(sample_league("b")));
        bus.flush().await;

        let seen = listener.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        match (&seen[0], &seen[1]) {
            (DomainEvent::LeagueInserted(a), DomainEvent::LeagueInserted(b)) => {
                assert_eq!(a.name, "a");
                assert_eq!(b.name, "b");
            }
            _ => panic!("unexpected event kinds"),
        }
    }

    #[tokio::test]
    async fn failing_listener_does_not_block_the_next_one() {
        let bus = EventBus::start();
        bus.subscribe(&[EventKind::LeagueInserted], Arc::new(FailingListener))
            .await;
        let survivor = CollectingListener::new("survivor");
        bus.subscribe(&[EventKind::LeagueInserted], survivor.clone())
            .await;

        bus.publish(DomainEvent::league_inserted(sample_league("c")));
        bus.flush().await;

        assert_eq!(survivor.seen_kinds(), vec![EventKind::LeagueInserted]);
    }

    #[tokio::test]
    async fn flush_resolves_with_no_listeners_registered() {
        let bus = EventBus::start();
        bus.publish(DomainEvent::league_inserted(sample_league("d")));
        bus.flush().await;
    }
}
