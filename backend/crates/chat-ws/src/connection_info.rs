use crate::ConnectionId;

use std::sync::Arc;

use chat_log::Notifier;
use chrono::DateTime;

/// Information about an active connection
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    /// Set once the client registers a username; absent connections are not in the roster
    pub username: Option<String>,
    pub connected_at: DateTime<chrono::Utc>,
    /// Wakes this connection's delivery task
    pub notifier: Arc<Notifier>,
}
