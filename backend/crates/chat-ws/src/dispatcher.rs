use crate::{
    ConnectionId, ConnectionRegistry, Metrics, Result as WsErrorResult, ServerMessage, WsError,
};

use std::panic::Location;

use bytes::Bytes;
use chat_log::{PushOutcome, SharedLog, Signal};
use error_location::ErrorLocation;
use log::{debug, info, warn};

/// Applies client actions to the shared history and the roster, then wakes
/// every subscriber once per mutation.
#[derive(Clone)]
pub struct Dispatcher {
    log: SharedLog,
    registry: ConnectionRegistry,
    metrics: Metrics,
}

impl Dispatcher {
    pub fn new(log: SharedLog, registry: ConnectionRegistry, metrics: Metrics) -> Self {
        Self {
            log,
            registry,
            metrics,
        }
    }

    /// Append a payload to the history and raise `NewData` on every connection.
    pub async fn publish(&self, payload: Bytes) -> PushOutcome {
        let outcome = self.log.push(payload).await;

        match &outcome {
            PushOutcome::Appended { seq, evicted } => {
                self.metrics.entry_appended(*evicted);
                let notified = self.registry.notify_all(Signal::NewData).await;
                debug!("Published entry {seq}, woke {notified} connections");
            }
            PushOutcome::Rejected { len, byte_capacity } => {
                warn!("Dropped {len} byte payload, history holds at most {byte_capacity} bytes");
                self.metrics.payload_rejected();
            }
        }

        outcome
    }

    /// Stamp a chat message with the sender's username and publish it.
    pub async fn post_chat(
        &self,
        connection_id: ConnectionId,
        text: String,
    ) -> WsErrorResult<PushOutcome> {
        let username =
            self.registry
                .username(connection_id)
                .await
                .ok_or_else(|| WsError::Unregistered {
                    location: ErrorLocation::from(Location::caller()),
                })?;

        let payload = ServerMessage::chat(username, text).to_payload()?;
        Ok(self.publish(payload).await)
    }

    /// Set or change a connection's username and raise `RosterChanged` on every connection.
    pub async fn rename(&self, connection_id: ConnectionId, username: String) -> WsErrorResult<()> {
        let previous = self
            .registry
            .set_username(connection_id, username.clone())
            .await?;

        match previous {
            Some(previous) => info!("Connection {connection_id} renamed '{previous}' to '{username}'"),
            None => info!("Connection {connection_id} joined as '{username}'"),
        }

        self.registry.notify_all(Signal::RosterChanged).await;
        Ok(())
    }

    /// Drop a connection from the registry. Remaining connections get
    /// `RosterChanged` when it had a username.
    pub async fn disconnect(&self, connection_id: ConnectionId) {
        let Some(info) = self.registry.unregister(connection_id).await else {
            return;
        };

        if let Some(username) = info.username {
            info!("'{username}' left");
            self.registry.notify_all(Signal::RosterChanged).await;
        }
    }

    pub fn log(&self) -> &SharedLog {
        &self.log
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }
}
