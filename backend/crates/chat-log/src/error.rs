use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Invalid log capacity: {message} {location}")]
    InvalidCapacity {
        message: String,
        location: ErrorLocation,
    },
}

impl LogError {
    #[track_caller]
    pub fn invalid_capacity<S: Into<String>>(message: S) -> Self {
        Self::InvalidCapacity {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LogError>;
