use serde::Deserialize;

/// Envelope sent by chat clients, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Claim (or change) the name shown in the roster and on messages
    RegisterUsername { username: String },
    /// Post a chat message
    Msg { msg: String },
}

impl ClientMessage {
    /// Name used in metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RegisterUsername { .. } => "register_username",
            Self::Msg { .. } => "msg",
        }
    }
}
