use crate::{Result as WsErrorResult, WsError};

use std::panic::Location;

use error_location::ErrorLocation;

/// Validates client envelopes before they reach the registry or the history
pub struct MessageValidator;

impl MessageValidator {
    /// Trim a requested username and check it is usable.
    #[track_caller]
    pub fn validate_username(username: &str, max_length: usize) -> WsErrorResult<String> {
        let trimmed = username.trim();

        if trimmed.is_empty() {
            return Err(WsError::ValidationError {
                message: "username cannot be empty".to_string(),
                field: Some("username".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let length = trimmed.chars().count();
        if length > max_length {
            return Err(WsError::ValidationError {
                message: format!("username must not exceed {max_length} characters, got {length}"),
                field: Some("username".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(WsError::ValidationError {
                message: "username cannot contain control characters".to_string(),
                field: Some("username".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(trimmed.to_string())
    }

    /// Blank messages carry nothing worth storing.
    pub fn is_blank_message(msg: &str) -> bool {
        msg.trim().is_empty()
    }
}
