use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SEND_BUFFER_SIZE, MAX_SEND_BUFFER_SIZE,
    MIN_SEND_BUFFER_SIZE,
};

use serde::Deserialize;

/// WebSocket connection settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebSocketConfig {
    /// Direct replies queued per connection before the client counts as too slow
    pub send_buffer_size: usize,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: DEFAULT_SEND_BUFFER_SIZE,
        }
    }
}

impl WebSocketConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.send_buffer_size < MIN_SEND_BUFFER_SIZE
            || self.send_buffer_size > MAX_SEND_BUFFER_SIZE
        {
            return Err(ConfigError::invalid(
                "websocket.send_buffer_size",
                format!(
                    "must be {MIN_SEND_BUFFER_SIZE}-{MAX_SEND_BUFFER_SIZE}, got {}",
                    self.send_buffer_size
                ),
            ));
        }

        Ok(())
    }
}
