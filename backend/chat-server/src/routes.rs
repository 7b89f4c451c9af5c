use crate::health;

use chat_ws::AppState;

use axum::{Router, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState, prometheus: Option<PrometheusHandle>) -> Router {
    let mut router = Router::new()
        // WebSocket endpoint; browser clients connect at the root
        .route("/", get(chat_ws::handler))
        .route("/ws", get(chat_ws::handler))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check));

    // Metrics scrape endpoint, only when a recorder is installed
    if let Some(handle) = prometheus {
        router = router.route("/metrics", get(move || async move { handle.render() }));
    }

    router
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins for WebSocket)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
