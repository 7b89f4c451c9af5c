use crate::{ChatLog, LogCapacity, LogStats, PushOutcome};

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::{RwLock, RwLockReadGuard};

/// The log as shared between producers and every session.
///
/// `push` performs the append and the whole eviction inside one write guard,
/// so readers never see a partially evicted log.
#[derive(Debug, Clone)]
pub struct SharedLog {
    inner: Arc<RwLock<ChatLog>>,
}

impl SharedLog {
    pub fn new(capacity: LogCapacity) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ChatLog::new(capacity))),
        }
    }

    pub async fn push(&self, payload: impl Into<Bytes>) -> PushOutcome {
        let mut log = self.inner.write().await;
        log.push(payload)
    }

    /// Read access. Never hold the guard across a transport send.
    pub async fn read(&self) -> RwLockReadGuard<'_, ChatLog> {
        self.inner.read().await
    }

    pub async fn stats(&self) -> LogStats {
        self.inner.read().await.stats()
    }
}

impl Default for SharedLog {
    fn default() -> Self {
        Self::new(LogCapacity::default())
    }
}
