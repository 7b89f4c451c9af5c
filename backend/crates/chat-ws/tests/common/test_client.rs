#![allow(dead_code)]

use chat_ws::ServerMessage;

use axum_test::{TestServer, TestWebSocket};
use serde_json::json;

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect and consume the greeting: backlog messages, then the roster.
    /// Returns the client with the backlog it was sent.
    pub async fn connect(server: &TestServer) -> (Self, Vec<ServerMessage>) {
        let ws = server.get_websocket("/ws").await.into_websocket().await;
        let mut client = Self { ws };

        let mut backlog = Vec::new();
        loop {
            let message = client.receive().await;
            if matches!(message, ServerMessage::UpdateUsernameList { .. }) {
                break;
            }
            backlog.push(message);
        }

        (client, backlog)
    }

    /// Connect, register `username`, and wait for the roster that includes it
    pub async fn connect_as(server: &TestServer, username: &str) -> Self {
        let (mut client, _) = Self::connect(server).await;
        client.register(username).await;
        client.receive_roster().await;
        client
    }

    pub async fn register(&mut self, username: &str) {
        self.ws
            .send_text(json!({"type": "register_username", "username": username}))
            .await;
    }

    pub async fn say(&mut self, msg: &str) {
        self.ws.send_text(json!({"type": "msg", "msg": msg})).await;
    }

    /// Send text message (for raw/malformed frames)
    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    /// Receive and decode the next server envelope
    pub async fn receive(&mut self) -> ServerMessage {
        let text = self.ws.receive_text().await;
        serde_json::from_str(&text).expect("Server sent an unknown envelope")
    }

    /// Receive the next envelope, which must be a roster update
    pub async fn receive_roster(&mut self) -> Vec<String> {
        match self.receive().await {
            ServerMessage::UpdateUsernameList { username_list } => username_list,
            other => panic!("expected roster, got {other:?}"),
        }
    }

    /// Receive the next envelope, which must be a chat message
    pub async fn receive_chat(&mut self) -> (String, String) {
        match self.receive().await {
            ServerMessage::Msg { username, msg, .. } => (username, msg),
            other => panic!("expected chat message, got {other:?}"),
        }
    }

    /// Receive the next envelope, which must be an error; returns its code
    pub async fn receive_error(&mut self) -> String {
        match self.receive().await {
            ServerMessage::Error { code, .. } => code,
            other => panic!("expected error, got {other:?}"),
        }
    }

    /// Close the WebSocket connection
    pub async fn close(self) {
        self.ws.close().await;
    }

    /// Drop the socket without a close frame, as a crashed client would
    pub fn abort(self) {
        drop(self.ws);
    }
}

/// Chat text of each message in a backlog
pub fn texts(backlog: &[ServerMessage]) -> Vec<String> {
    backlog
        .iter()
        .filter_map(|message| match message {
            ServerMessage::Msg { msg, .. } => Some(msg.clone()),
            _ => None,
        })
        .collect()
}
