#![allow(dead_code)]

use chat_log::{LogCapacity, SharedLog};
use chat_ws::{
    AppState, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Metrics, ShutdownCoordinator,
};

use axum::{Router, routing::get};
use axum_test::TestServer;

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections_total: usize,
    pub byte_capacity: usize,
    pub entry_capacity: usize,
    pub max_username_length: usize,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections_total: 100,
            byte_capacity: 1 << 16,
            entry_capacity: 100,
            max_username_length: 32,
        }
    }
}

impl TestServerConfig {
    /// Create config with strict connection limits (for limit tests)
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections_total: 2,
            ..Default::default()
        }
    }

    /// Create config whose history keeps only the last `entry_capacity` messages
    pub fn with_short_history(entry_capacity: usize) -> Self {
        Self {
            entry_capacity,
            ..Default::default()
        }
    }
}

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let (app, app_state) = create_app(config);
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

/// Build the Axum Router with AppState
fn create_app(config: TestServerConfig) -> (Router, AppState) {
    let capacity = LogCapacity::new(config.byte_capacity, config.entry_capacity)
        .expect("Invalid test history capacity");

    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.max_connections_total,
    });

    let connection_config = ConnectionConfig {
        max_username_length: config.max_username_length,
        ..Default::default()
    };

    let app_state = AppState::new(
        SharedLog::new(capacity),
        registry,
        Metrics::default(),
        ShutdownCoordinator::new(),
        connection_config,
    );

    let router = Router::new()
        .route("/ws", get(chat_ws::handler))
        .with_state(app_state.clone());

    (router, app_state)
}
