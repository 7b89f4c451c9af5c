use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ChatConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, HistoryConfig, LoggingConfig, ServerConfig, WebSocketConfig,
};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub history: HistoryConfig,
    pub chat: ChatConfig,
    pub websocket: WebSocketConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CHAT_CONFIG_DIR env var, else use ./.chat/
    /// 2. Load config.toml from there if it exists, else use defaults
    /// 3. Apply CHAT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CHAT_CONFIG_DIR env var > ./.chat/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|e| ConfigError::ConfigDir {
                message: format!("cannot determine current working directory: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.history.validate()?;
        self.chat.validate()?;
        self.websocket.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        self.server.bind_addr()
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections)",
            self.server.host, self.server.port, self.server.max_connections
        );
        info!(
            "  history: {} bytes / {} messages",
            self.history.byte_capacity, self.history.entry_capacity
        );
        info!(
            "  chat: max username length {}",
            self.chat.max_username_length
        );
        info!(
            "  websocket: send buffer {}",
            self.websocket.send_buffer_size
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CHAT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CHAT_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "CHAT_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );

        // History
        Self::apply_env_parse(
            "CHAT_HISTORY_BYTE_CAPACITY",
            &mut self.history.byte_capacity,
        );
        Self::apply_env_parse(
            "CHAT_HISTORY_ENTRY_CAPACITY",
            &mut self.history.entry_capacity,
        );

        // Chat
        Self::apply_env_parse(
            "CHAT_MAX_USERNAME_LENGTH",
            &mut self.chat.max_username_length,
        );

        // WebSocket
        Self::apply_env_parse(
            "CHAT_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );

        // Logging
        Self::apply_env_parse("CHAT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CHAT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CHAT_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
