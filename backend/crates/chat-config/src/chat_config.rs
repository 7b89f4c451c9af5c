use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_USERNAME_LENGTH, MAX_MAX_USERNAME_LENGTH,
    MIN_MAX_USERNAME_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Longest accepted username, in characters
    pub max_username_length: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
        }
    }
}

impl ChatConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_username_length < MIN_MAX_USERNAME_LENGTH
            || self.max_username_length > MAX_MAX_USERNAME_LENGTH
        {
            return Err(ConfigError::invalid(
                "chat.max_username_length",
                format!(
                    "must be {MIN_MAX_USERNAME_LENGTH}-{MAX_MAX_USERNAME_LENGTH}, got {}",
                    self.max_username_length
                ),
            ));
        }

        Ok(())
    }
}
