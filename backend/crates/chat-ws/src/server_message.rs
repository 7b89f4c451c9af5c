use crate::{Result as WsErrorResult, WsError};

use bytes::Bytes;
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Envelope sent to chat clients, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A chat message; its serialized form is what the history stores
    Msg {
        timestamp: String,
        username: String,
        msg: String,
    },
    /// Current roster, sent whenever it changes
    UpdateUsernameList { username_list: Vec<String> },
    /// A request from this client was rejected
    Error { code: String, message: String },
}

impl ServerMessage {
    /// Chat message stamped with the current UTC time
    pub fn chat(username: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Msg {
            timestamp: chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string(),
            username: username.into(),
            msg: msg.into(),
        }
    }

    pub fn roster(username_list: Vec<String>) -> Self {
        Self::UpdateUsernameList { username_list }
    }

    pub fn error(error: &WsError) -> Self {
        Self::Error {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }

    /// Serialized JSON, ready to go on the wire
    pub fn to_payload(&self) -> WsErrorResult<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(self)?))
    }
}
