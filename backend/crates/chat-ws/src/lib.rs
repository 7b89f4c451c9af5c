pub mod app_state;
pub mod client_message;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_limits;
pub mod connection_registry;
pub mod dispatcher;
pub mod error;
pub mod message_validator;
pub mod metrics;
pub mod metrics_timer;
pub mod server_message;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod web_socket_connection;
pub mod web_socket_transport;

pub use app_state::{AppState, handler};
pub use client_message::ClientMessage;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::ConnectionRegistry;
pub use dispatcher::Dispatcher;
pub use error::{Result, WsError};
pub use message_validator::MessageValidator;
pub use metrics::Metrics;
pub use metrics_timer::MetricsTimer;
pub use server_message::ServerMessage;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use web_socket_connection::WebSocketConnection;
pub use web_socket_transport::WebSocketTransport;

#[cfg(test)]
mod tests;
