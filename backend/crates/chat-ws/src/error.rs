use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Connection limit exceeded: {current} connections (max: {max}) {location}")]
    ConnectionLimitExceeded {
        current: usize,
        max: usize,
        location: ErrorLocation,
    },

    #[error("Invalid message: {message} {location}")]
    InvalidMessage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message}")]
    ValidationError {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Register a username before sending messages")]
    Unregistered { location: ErrorLocation },

    #[error("Unknown connection: {connection_id} {location}")]
    UnknownConnection {
        connection_id: String,
        location: ErrorLocation,
    },

    #[error("JSON serialization failed: {source} {location}")]
    Serialize {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Send buffer full, client too slow {location}")]
    SendBufferFull { location: ErrorLocation },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl WsError {
    /// Stable code sent to clients in error envelopes
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConnectionClosed { .. } => "CONNECTION_CLOSED",
            Self::ConnectionLimitExceeded { .. } => "CONNECTION_LIMIT",
            Self::InvalidMessage { .. } => "INVALID_MESSAGE",
            Self::ValidationError { .. } => "VALIDATION_ERROR",
            Self::Unregistered { .. } => "UNREGISTERED",
            Self::UnknownConnection { .. } => "UNKNOWN_CONNECTION",
            Self::Serialize { .. } => "ENCODE_ERROR",
            Self::SendBufferFull { .. } => "SLOW_CLIENT",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Errors that are reported back to the client without closing the connection
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidMessage { .. } | Self::ValidationError { .. } | Self::Unregistered { .. }
        )
    }
}

impl From<serde_json::Error> for WsError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
