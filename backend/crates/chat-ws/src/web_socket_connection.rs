use crate::{
    ClientMessage, ConnectionConfig, ConnectionId, ConnectionRegistry, Dispatcher,
    MessageValidator, Metrics, MetricsTimer, Result as WsErrorResult, ServerMessage,
    ShutdownGuard, WebSocketTransport, WsError,
};

use std::panic::Location;
use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use chat_log::{Cursor, Notifier, SharedLog, Signal, catch_up};
use error_location::ErrorLocation;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Manages a single WebSocket connection
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    notifier: Arc<Notifier>,
    dispatcher: Dispatcher,
    config: ConnectionConfig,
    metrics: Metrics,
}

impl WebSocketConnection {
    pub fn new(
        connection_id: ConnectionId,
        notifier: Arc<Notifier>,
        dispatcher: Dispatcher,
        config: ConnectionConfig,
        metrics: Metrics,
    ) -> Self {
        Self {
            connection_id,
            notifier,
            dispatcher,
            config,
            metrics,
        }
    }

    /// Handle the WebSocket connection lifecycle
    pub async fn handle(
        self,
        socket: WebSocket,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        log::info!("WebSocket connection {} established", self.connection_id);

        self.metrics.connection_established();

        // Split socket into sender and receiver
        let (ws_sender, mut ws_receiver) = socket.split();

        // Bounded channel for replies addressed to this client only
        let (tx, direct_rx) = mpsc::channel::<ServerMessage>(self.config.send_buffer_size);

        // Deliver the backlog and the current roster straight away
        self.notifier.notify(Signal::NewData);
        self.notifier.notify(Signal::RosterChanged);

        let delivery = Delivery {
            connection_id: self.connection_id,
            log: self.dispatcher.log().clone(),
            registry: self.dispatcher.registry().clone(),
            metrics: self.metrics.clone(),
            transport: WebSocketTransport::new(ws_sender),
            cursor: Cursor::new(),
        };
        let mut delivery_task =
            tokio::spawn(delivery.run(Arc::clone(&self.notifier), direct_rx));

        let result = loop {
            tokio::select! {
                // Handle incoming messages from client
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(msg)) => {
                            if let Err(e) = self.handle_client_message(msg).await {
                                self.metrics
                                    .error_occurred(&e.error_code().to_lowercase());

                                if !e.is_recoverable() {
                                    log::error!(
                                        "Error handling message from connection {}: {}",
                                        self.connection_id,
                                        e
                                    );
                                    break Err(e);
                                }

                                log::warn!("Rejected message from connection {}: {}", self.connection_id, e);
                                if let Err(e) = Self::reply(&tx, ServerMessage::error(&e)) {
                                    break Err(e);
                                }
                            }
                        }
                        Some(Err(e)) => {
                            log::error!(
                                "WebSocket error on connection {}: {}",
                                self.connection_id,
                                e
                            );
                            break Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {}", e),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => {
                            log::info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                // Delivery only stops when the client can no longer be written to
                delivered = &mut delivery_task => {
                    break match delivered {
                        Ok(Ok(())) => Ok(()),
                        Ok(Err(e)) => {
                            log::warn!("Delivery to connection {} failed: {}", self.connection_id, e);
                            Err(e)
                        }
                        Err(e) => Err(WsError::Internal {
                            message: format!("delivery task failed: {e}"),
                            location: ErrorLocation::from(Location::caller()),
                        }),
                    };
                }

                // Handle graceful shutdown
                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    break Ok(());
                }
            }
        };

        // Cleanup
        drop(tx);
        delivery_task.abort();

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });

        log::info!("WebSocket connection {} closed", self.connection_id);

        result
    }

    /// Handle a message from the client
    async fn handle_client_message(&self, msg: Message) -> WsErrorResult<()> {
        match msg {
            Message::Text(text) => {
                log::debug!("Received text message: {}", text.as_str());
                let message: ClientMessage =
                    serde_json::from_str(text.as_str()).map_err(|e| WsError::InvalidMessage {
                        message: format!("unrecognized envelope: {e}"),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                self.handle_envelope(message).await
            }
            Message::Binary(data) => {
                log::debug!(
                    "Received binary message ({} bytes) from connection {}",
                    data.len(),
                    self.connection_id
                );
                Err(WsError::InvalidMessage {
                    message: "binary frames are not supported".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Message::Ping(_) | Message::Pong(_) => {
                // Pongs are written by axum
                Ok(())
            }
            Message::Close(_) => {
                log::info!("Received close frame from connection {}", self.connection_id);
                Ok(())
            }
        }
    }

    async fn handle_envelope(&self, message: ClientMessage) -> WsErrorResult<()> {
        self.metrics.message_received(message.kind());

        match message {
            ClientMessage::RegisterUsername { username } => {
                let username = MessageValidator::validate_username(
                    &username,
                    self.config.max_username_length,
                )?;
                self.dispatcher.rename(self.connection_id, username).await
            }
            ClientMessage::Msg { msg } => {
                if MessageValidator::is_blank_message(&msg) {
                    log::debug!("Ignoring blank message from connection {}", self.connection_id);
                    return Ok(());
                }
                self.dispatcher.post_chat(self.connection_id, msg).await?;
                Ok(())
            }
        }
    }

    fn reply(tx: &mpsc::Sender<ServerMessage>, message: ServerMessage) -> WsErrorResult<()> {
        tx.try_send(message).map_err(|e| match e {
            TrySendError::Full(_) => WsError::SendBufferFull {
                location: ErrorLocation::from(Location::caller()),
            },
            TrySendError::Closed(_) => WsError::ConnectionClosed {
                reason: "delivery stopped".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        })
    }
}

/// Writer half of a connection: owns the sink and the cursor.
struct Delivery {
    connection_id: ConnectionId,
    log: SharedLog,
    registry: ConnectionRegistry,
    metrics: Metrics,
    transport: WebSocketTransport,
    cursor: Cursor,
}

impl Delivery {
    async fn run(
        mut self,
        notifier: Arc<Notifier>,
        mut direct_rx: mpsc::Receiver<ServerMessage>,
    ) -> WsErrorResult<()> {
        loop {
            tokio::select! {
                signal = notifier.wait() => {
                    self.handle_signal(signal).await?;
                }
                direct = direct_rx.recv() => {
                    match direct {
                        Some(message) => self.transport.send_message(&message).await?,
                        None => {
                            self.transport.close().await;
                            return Ok(());
                        }
                    }
                }
            }
        }
    }

    async fn handle_signal(&mut self, signal: Signal) -> WsErrorResult<()> {
        match signal {
            Signal::NewData => {
                let timer = MetricsTimer::new(self.metrics.clone());
                let report = catch_up(&self.log, &mut self.cursor, &mut self.transport).await?;
                timer.finish(&report);

                if report.resyncs > 0 {
                    log::debug!(
                        "Connection {} fell behind eviction and resynced {} times",
                        self.connection_id,
                        report.resyncs
                    );
                }
            }
            Signal::RosterChanged => {
                let roster = self.registry.roster().await;
                self.transport
                    .send_message(&ServerMessage::roster(roster))
                    .await?;
                self.metrics.roster_sent();
            }
        }

        Ok(())
    }
}
