use crate::{Result as WsErrorResult, ServerMessage, WsError};

use std::panic::Location;

use async_trait::async_trait;
use axum::extract::ws::{Message, Utf8Bytes, WebSocket};
use bytes::Bytes;
use chat_log::Transport;
use error_location::ErrorLocation;
use futures::SinkExt;
use futures::stream::SplitSink;

/// Sending half of a client socket. Every payload goes out as a text frame.
pub struct WebSocketTransport {
    sink: SplitSink<WebSocket, Message>,
}

impl WebSocketTransport {
    pub fn new(sink: SplitSink<WebSocket, Message>) -> Self {
        Self { sink }
    }

    pub async fn send_message(&mut self, message: &ServerMessage) -> WsErrorResult<()> {
        let payload = message.to_payload()?;
        self.send(payload).await
    }

    /// Send a close frame; errors are ignored since the peer may already be gone.
    pub async fn close(&mut self) {
        let _ = self.sink.close().await;
    }
}

#[async_trait]
impl Transport for WebSocketTransport {
    type Error = WsError;

    async fn send(&mut self, payload: Bytes) -> Result<(), Self::Error> {
        let text = Utf8Bytes::try_from(payload).map_err(|e| WsError::Internal {
            message: format!("payload is not UTF-8: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.sink
            .send(Message::Text(text))
            .await
            .map_err(|e| WsError::ConnectionClosed {
                reason: format!("send failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
