use crate::error::Result as ServerErrorResult;

use chat_config::Config;
use chat_log::{LogCapacity, SharedLog};
use chat_ws::{
    AppState, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics, ShutdownCoordinator,
};

use log::info;

/// Build the shared history, registry and session settings from `config`.
pub fn build_app_state(config: &Config) -> ServerErrorResult<AppState> {
    let capacity = LogCapacity::new(config.history.byte_capacity, config.history.entry_capacity)?;
    info!(
        "History holds up to {} bytes / {} messages",
        capacity.byte_capacity, capacity.entry_capacity
    );

    // Create connection registry with limits
    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.server.max_connections,
    });

    let connection_config = ConnectionConfig {
        send_buffer_size: config.websocket.send_buffer_size,
        max_username_length: config.chat.max_username_length,
    };

    Ok(AppState::new(
        SharedLog::new(capacity),
        registry,
        Metrics::new(),
        ShutdownCoordinator::new(),
        connection_config,
    ))
}
