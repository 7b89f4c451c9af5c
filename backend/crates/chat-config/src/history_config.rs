use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BYTE_CAPACITY, DEFAULT_ENTRY_CAPACITY,
    MAX_BYTE_CAPACITY, MAX_ENTRY_CAPACITY, MIN_BYTE_CAPACITY, MIN_ENTRY_CAPACITY,
};

use serde::Deserialize;

/// Bounds of the in-memory message history shared by all subscribers.
/// Whichever bound is hit first triggers eviction of the oldest messages.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum total payload bytes kept
    pub byte_capacity: usize,
    /// Maximum number of messages kept
    pub entry_capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            byte_capacity: DEFAULT_BYTE_CAPACITY,
            entry_capacity: DEFAULT_ENTRY_CAPACITY,
        }
    }
}

impl HistoryConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.byte_capacity < MIN_BYTE_CAPACITY || self.byte_capacity > MAX_BYTE_CAPACITY {
            return Err(ConfigError::invalid(
                "history.byte_capacity",
                format!(
                    "must be {MIN_BYTE_CAPACITY}-{MAX_BYTE_CAPACITY}, got {}",
                    self.byte_capacity
                ),
            ));
        }

        if self.entry_capacity < MIN_ENTRY_CAPACITY || self.entry_capacity > MAX_ENTRY_CAPACITY {
            return Err(ConfigError::invalid(
                "history.entry_capacity",
                format!(
                    "must be {MIN_ENTRY_CAPACITY}-{MAX_ENTRY_CAPACITY}, got {}",
                    self.entry_capacity
                ),
            ));
        }

        Ok(())
    }
}
