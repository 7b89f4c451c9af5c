use crate::{
    ConnectionConfig, ConnectionId, ConnectionRegistry, Dispatcher, Metrics, ShutdownCoordinator,
    WebSocketConnection,
};

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use chat_log::{Notifier, SharedLog};
use log::{error, info};

/// Shared application state for WebSocket handlers
#[derive(Clone)]
pub struct AppState {
    pub log: SharedLog,
    pub dispatcher: Dispatcher,
    pub registry: ConnectionRegistry,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
}

impl AppState {
    /// Wire a dispatcher over `log` and `registry`.
    pub fn new(
        log: SharedLog,
        registry: ConnectionRegistry,
        metrics: Metrics,
        shutdown: ShutdownCoordinator,
        config: ConnectionConfig,
    ) -> Self {
        let dispatcher = Dispatcher::new(log.clone(), registry.clone(), metrics.clone());
        Self {
            log,
            dispatcher,
            registry,
            metrics,
            shutdown,
            config,
        }
    }
}

/// WebSocket upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    // Register connection (enforces connection limits)
    let (connection_id, notifier) = state.registry.register().await.map_err(|e| {
        error!("Failed to register connection: {}", e);
        state.metrics.connection_rejected();
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    info!("Upgrading connection {}", connection_id);

    // The socket handler never runs for a failed upgrade, so release the slot here
    let registry = state.registry.clone();
    let ws = ws.on_failed_upgrade(move |e| {
        error!("WebSocket upgrade for connection {connection_id} failed: {e}");
        tokio::spawn(async move {
            registry.unregister(connection_id).await;
        });
    });

    // Upgrade to WebSocket
    Ok(ws.on_upgrade(move |socket| handle_socket(socket, connection_id, notifier, state)))
}

/// Handle WebSocket connection after upgrade
async fn handle_socket(
    socket: WebSocket,
    connection_id: ConnectionId,
    notifier: Arc<Notifier>,
    state: AppState,
) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection = WebSocketConnection::new(
        connection_id,
        notifier,
        state.dispatcher.clone(),
        state.config.clone(),
        state.metrics.clone(),
    );

    // Handle connection lifecycle
    let result = connection.handle(socket, shutdown_guard).await;

    // Unregister on disconnect
    state.dispatcher.disconnect(connection_id).await;

    if let Err(e) = result {
        error!("Connection {connection_id} error: {e}");
    }
}
