//! API Routes
//!
//! Configures the Axum router with all part lookup endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    docs_handler, health_handler, invalidate_all_handler, invalidate_part_handler,
    query_part_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin, the browser extension calls from arbitrary pages
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/part/:part_number", get(query_part_handler))
        .route("/health", get(health_handler))
        .route("/stats", get(stats_handler))
        .route("/cache", delete(invalidate_all_handler))
        .route("/cache/:part_number", delete(invalidate_part_handler))
        .route("/docs", get(docs_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
