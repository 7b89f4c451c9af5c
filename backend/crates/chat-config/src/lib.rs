mod chat_config;
mod config;
mod error;
mod history_config;
mod log_level;
mod logging_config;
mod server_config;
mod websocket_config;

#[cfg(test)]
mod tests;

pub use chat_config::ChatConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use history_config::HistoryConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use websocket_config::WebSocketConfig;

const CONFIG_DIR_ENV: &str = "CHAT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".chat";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 9999;
const MIN_PORT: u16 = 1024;

const DEFAULT_MAX_CONNECTIONS: usize = 1000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100_000;

const DEFAULT_BYTE_CAPACITY: usize = 1 << 16;
const MIN_BYTE_CAPACITY: usize = 1;
const MAX_BYTE_CAPACITY: usize = 1 << 30;

const DEFAULT_ENTRY_CAPACITY: usize = 1000;
const MIN_ENTRY_CAPACITY: usize = 1;
const MAX_ENTRY_CAPACITY: usize = 1_000_000;

const DEFAULT_MAX_USERNAME_LENGTH: usize = 32;
const MIN_MAX_USERNAME_LENGTH: usize = 1;
const MAX_MAX_USERNAME_LENGTH: usize = 256;

const DEFAULT_SEND_BUFFER_SIZE: usize = 32;
const MIN_SEND_BUFFER_SIZE: usize = 1;
const MAX_SEND_BUFFER_SIZE: usize = 10_000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
