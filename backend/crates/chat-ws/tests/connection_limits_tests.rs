mod common;

use common::{
    test_client::WsTestClient,
    test_server::{TestServerConfig, create_test_server, create_test_server_with_config},
};

use tokio::time::{Duration, sleep};

#[tokio::test]
async fn given_server_at_total_limit_when_new_connection_then_rejected_503() {
    // Given - Server with total limit of 2 connections
    let test_server = create_test_server_with_config(TestServerConfig::with_strict_limits());
    let _client1 = WsTestClient::connect(&test_server.server).await;
    let _client2 = WsTestClient::connect(&test_server.server).await;

    // When - Try to create 3rd connection
    let response = test_server.server.get_websocket("/ws").await;

    // Then - Rejected with 503
    response.assert_status_service_unavailable();
}

#[tokio::test]
async fn given_server_at_limit_when_client_disconnects_then_new_connection_succeeds() {
    // Given
    let test_server = create_test_server_with_config(TestServerConfig::with_strict_limits());
    let (client1, _) = WsTestClient::connect(&test_server.server).await;
    let _client2 = WsTestClient::connect(&test_server.server).await;

    // When - Free a slot
    client1.close().await;
    sleep(Duration::from_millis(100)).await;

    // Then
    let (_client3, backlog) = WsTestClient::connect(&test_server.server).await;
    assert!(backlog.is_empty());
    assert_eq!(test_server.app_state.registry.total_count().await, 2);
}

#[tokio::test]
async fn given_connected_clients_when_shutdown_then_sessions_unregistered() {
    // Given
    let test_server = create_test_server();
    let _alice = WsTestClient::connect_as(&test_server.server, "alice").await;
    let _bob = WsTestClient::connect(&test_server.server).await;
    assert_eq!(test_server.app_state.registry.total_count().await, 2);

    // When
    test_server.app_state.shutdown.shutdown();
    sleep(Duration::from_millis(100)).await;

    // Then
    assert_eq!(test_server.app_state.registry.total_count().await, 0);
}
