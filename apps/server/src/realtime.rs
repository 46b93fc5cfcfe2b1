//! Websocket channel registry and push delivery.
//!
//! Connections register under the user id they authenticated with; a
//! user may hold several live connections (tabs, devices). Delivery is
//! best-effort: zero open connections means the frame is dropped, the
//! persisted notification is the durable record.

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use dashmap::DashMap;
use futures::StreamExt;
use serde_json::json;
use tokio::sync::mpsc;
use tracing::{debug, info};

use matchday_core::errors::Result;
use matchday_core::events::EventKind;
use matchday_core::notifications::RealtimePush;

type FrameSender = mpsc::UnboundedSender<String>;

#[derive(Default)]
pub struct ChannelManager {
    connections: DashMap<String, Vec<FrameSender>>,
}

impl ChannelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a connection for `user_id` and returns the receiving
    /// half the socket task drains.
    pub fn register(&self, user_id: &str) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.connections
            .entry(user_id.to_string())
            .or_default()
            .push(tx);
        debug!("Registered realtime connection for user {user_id}");
        rx
    }

    /// Drops closed senders for `user_id`; called when a socket ends.
    pub fn prune(&self, user_id: &str) {
        if let Some(mut senders) = self.connections.get_mut(user_id) {
            senders.retain(|tx| !tx.is_closed());
        }
        self.connections
            .remove_if(user_id, |_, senders| senders.is_empty());
    }

    pub fn connection_count(&self) -> usize {
        self.connections.iter().map(|e| e.value().len()).sum()
    }

    fn frame(kind: EventKind, payload: &serde_json::Value) -> String {
        json!({ "event": kind.as_str(), "data": payload }).to_string()
    }
}

#[async_trait]
impl RealtimePush for ChannelManager {
    async fn push_to_user(
        &self,
        user_id: &str,
        kind: EventKind,
        payload: serde_json::Value,
    ) -> Result<()> {
        let frame = Self::frame(kind, &payload);
        if let Some(mut senders) = self.connections.get_mut(user_id) {
            senders.retain(|tx| tx.send(frame.clone()).is_ok());
        }
        Ok(())
    }

    async fn broadcast(&self, kind: EventKind, payload: serde_json::Value) -> Result<()> {
        let frame = Self::frame(kind, &payload);
        for mut entry in self.connections.iter_mut() {
            entry.value_mut().retain(|tx| tx.send(frame.clone()).is_ok());
        }
        Ok(())
    }
}

/// Drives one upgraded websocket until either side closes it.
pub async fn handle_socket(socket: WebSocket, user_id: String, channels: Arc<ChannelManager>) {
    let mut rx = channels.register(&user_id);
    let (mut sink, mut stream) = socket.split();

    info!("Realtime connection opened for user {user_id}");
    loop {
        tokio::select! {
            frame = rx.recv() => {
                let Some(frame) = frame else { break };
                use futures::SinkExt;
                if sink.send(Message::Text(frame.into())).await.is_err() {
                    break;
                }
            }
            incoming = stream.next() => {
                // The channel is push-only; anything but a close/ping is ignored.
                match incoming {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    _ => {}
                }
            }
        }
    }

    channels.prune(&user_id);
    info!("Realtime connection closed for user {user_id}");
}
