//! API Handlers
//!
//! HTTP request handlers for each endpoint. They only translate between
//! HTTP and the [`QueryService`].

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::{
    AggregatedResult, ApiResponse, DocsResponse, HealthResponse, InvalidateResponse,
    StatsResponse,
};
use crate::services::QueryService;
use crate::sources::SimulatedRemote;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QueryService>,
}

impl AppState {
    /// Creates a new AppState around an existing service.
    pub fn new(service: QueryService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration, backed by the simulated
    /// vendor remote.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let remote =
            SimulatedRemote::new().with_failure_rate(config.simulated_failure_rate);
        Self::new(QueryService::new(config, Arc::new(remote)))
    }
}

/// Handler for GET /api/part/:partNumber
pub async fn query_part_handler(
    State(state): State<AppState>,
    Path(part_number): Path<String>,
) -> Result<Json<ApiResponse<AggregatedResult>>> {
    let result = state.service.query_part(&part_number).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// Handler for DELETE /cache/:partNumber
pub async fn invalidate_part_handler(
    State(state): State<AppState>,
    Path(part_number): Path<String>,
) -> Result<Json<InvalidateResponse>> {
    let removed = state.service.invalidate(&part_number).await?;
    Ok(Json(InvalidateResponse::for_part(
        part_number.trim(),
        removed,
    )))
}

/// Handler for DELETE /cache
pub async fn invalidate_all_handler(State(state): State<AppState>) -> Json<InvalidateResponse> {
    let removed = state.service.invalidate_all().await;
    Json(InvalidateResponse::all(removed))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(state.service.health().await)
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.service.stats().await))
}

/// Handler for GET /docs
pub async fn docs_handler(State(state): State<AppState>) -> Json<DocsResponse> {
    Json(state.service.docs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ServiceError;

    fn state() -> AppState {
        AppState::new(QueryService::new(
            &Config::default(),
            Arc::new(SimulatedRemote::new().without_latency()),
        ))
    }

    #[tokio::test]
    async fn test_query_and_invalidate_handlers() {
        let state = state();

        let response = query_part_handler(State(state.clone()), Path("NE555D".to_string()))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.data.prices.len(), 6);

        let response =
            invalidate_part_handler(State(state.clone()), Path("NE555D".to_string()))
                .await
                .unwrap();
        assert_eq!(response.removed, 8);
    }

    #[tokio::test]
    async fn test_query_handler_rejects_blank() {
        let result = query_part_handler(State(state()), Path(" ".to_string())).await;
        assert!(matches!(result, Err(ServiceError::MalformedRequest(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler(State(state())).await;
        assert_eq!(response.status, "ok");
        assert_eq!(response.sources.count, 6);
    }
}
