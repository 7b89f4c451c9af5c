use crate::{ConnectionId, ConnectionInfo, ConnectionLimits, Result as WsErrorResult, WsError};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use chat_log::{Notifier, Signal};
use error_location::ErrorLocation;
use log::{debug, info, warn};
use tokio::sync::RwLock;

/// Registry of active connections: each one's notifier and username.
///
/// Owned by the session layer and shared by clone. Entries are inserted on
/// connect and removed on disconnect.
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    limits: ConnectionLimits,
}

struct RegistryInner {
    /// All active connections by connection_id
    connections: HashMap<ConnectionId, ConnectionInfo>,
    next_id: u64,
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                connections: HashMap::new(),
                next_id: 1,
            })),
            limits,
        }
    }

    /// Register a new connection, returns its id and notifier if admitted
    pub async fn register(&self) -> WsErrorResult<(ConnectionId, Arc<Notifier>)> {
        let mut inner = self.inner.write().await;

        if inner.connections.len() >= self.limits.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                inner.connections.len(),
                self.limits.max_total
            );
            return Err(WsError::ConnectionLimitExceeded {
                current: inner.connections.len(),
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let connection_id = ConnectionId::from_seq(inner.next_id);
        inner.next_id += 1;
        let notifier = Arc::new(Notifier::new());

        inner.connections.insert(
            connection_id,
            ConnectionInfo {
                connection_id,
                username: None,
                connected_at: chrono::Utc::now(),
                notifier: Arc::clone(&notifier),
            },
        );
        info!(
            "Registered connection {connection_id} ({} total)",
            inner.connections.len()
        );

        Ok((connection_id, notifier))
    }

    /// Unregister a connection, returning its info if it was registered
    pub async fn unregister(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        let mut inner = self.inner.write().await;

        let removed = inner.connections.remove(&connection_id);
        if removed.is_some() {
            info!(
                "Unregistered connection {connection_id} ({} total remaining)",
                inner.connections.len()
            );
        }
        removed
    }

    /// Set or replace the username of a connection, returning the previous one
    pub async fn set_username(
        &self,
        connection_id: ConnectionId,
        username: String,
    ) -> WsErrorResult<Option<String>> {
        let mut inner = self.inner.write().await;

        let info = inner
            .connections
            .get_mut(&connection_id)
            .ok_or_else(|| WsError::UnknownConnection {
                connection_id: connection_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Connection {connection_id} registered username '{username}'");
        Ok(info.username.replace(username))
    }

    /// Username of a connection, if it registered one
    pub async fn username(&self, connection_id: ConnectionId) -> Option<String> {
        let inner = self.inner.read().await;
        inner
            .connections
            .get(&connection_id)
            .and_then(|info| info.username.clone())
    }

    /// Registered usernames in connection order
    pub async fn roster(&self) -> Vec<String> {
        let inner = self.inner.read().await;

        let mut named: Vec<&ConnectionInfo> = inner
            .connections
            .values()
            .filter(|info| info.username.is_some())
            .collect();
        named.sort_by_key(|info| info.connection_id);

        named
            .into_iter()
            .filter_map(|info| info.username.clone())
            .collect()
    }

    /// Raise `signal` on every connection, returns how many were notified
    pub async fn notify_all(&self, signal: Signal) -> usize {
        let inner = self.inner.read().await;

        for info in inner.connections.values() {
            info.notifier.notify(signal);
        }
        inner.connections.len()
    }

    /// Get information about a specific connection
    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner.connections.get(&connection_id).cloned()
    }

    /// Get total connection count
    pub async fn total_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.connections.len()
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            limits: self.limits.clone(),
        }
    }
}
