use crate::ShutdownCoordinator;

use tokio::sync::broadcast;

/// A session's view of the shutdown signal.
///
/// Also fires for sessions that subscribed after shutdown was triggered.
pub struct ShutdownGuard {
    shutdown_rx: broadcast::Receiver<()>,
    coordinator: ShutdownCoordinator,
}

impl ShutdownGuard {
    pub fn new(coordinator: &ShutdownCoordinator) -> Self {
        Self {
            shutdown_rx: coordinator.subscribe(),
            coordinator: coordinator.clone(),
        }
    }

    /// Wait for shutdown signal
    pub async fn wait(&mut self) {
        if self.coordinator.is_shutting_down() {
            return;
        }
        let _ = self.shutdown_rx.recv().await;
    }

    /// Poll for shutdown signal (non-blocking)
    pub fn poll_shutdown(&mut self) -> bool {
        matches!(self.shutdown_rx.try_recv(), Ok(_)) || self.coordinator.is_shutting_down()
    }
}
