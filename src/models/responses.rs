//! Response DTOs for the part lookup API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::sources::SourceId;

/// Success envelope for data-bearing responses: `{ success: true, data }`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Response body for cache invalidation (DELETE /cache, DELETE /cache/:partNumber)
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub success: bool,
    pub message: String,
    /// Number of cache entries removed
    pub removed: usize,
}

impl InvalidateResponse {
    pub fn for_part(part_number: &str, removed: usize) -> Self {
        Self {
            success: true,
            message: format!("Cache for part '{}' cleared", part_number),
            removed,
        }
    }

    pub fn all(removed: usize) -> Self {
        Self {
            success: true,
            message: "All cache entries cleared".to_string(),
            removed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries dropped after their TTL elapsed
    pub expirations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Cache section of the health report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheHealth {
    pub size: usize,
    pub default_ttl_ms: u64,
}

/// Sources section of the health report.
#[derive(Debug, Clone, Serialize)]
pub struct SourcesHealth {
    pub count: usize,
    /// Display names in configured order
    pub configured: Vec<String>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "ok")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    pub version: String,
    pub cache: CacheHealth,
    pub sources: SourcesHealth,
}

impl HealthResponse {
    /// Creates a healthy report stamped with the current time
    pub fn ok(cache: CacheHealth, sources: &[SourceId]) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            cache,
            sources: SourcesHealth {
                count: sources.len(),
                configured: sources
                    .iter()
                    .map(|s| s.display_name().to_string())
                    .collect(),
            },
        }
    }
}

/// One endpoint in the API description.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// One configured source in the API description.
#[derive(Debug, Clone, Serialize)]
pub struct SourceDoc {
    pub id: &'static str,
    pub name: &'static str,
    pub currency: &'static str,
    pub endpoint: &'static str,
}

impl From<SourceId> for SourceDoc {
    fn from(source: SourceId) -> Self {
        Self {
            id: source.id(),
            name: source.display_name(),
            currency: source.currency(),
            endpoint: source.api_endpoint(),
        }
    }
}

/// Response body for the docs endpoint (GET /docs)
#[derive(Debug, Clone, Serialize)]
pub struct DocsResponse {
    pub title: &'static str,
    pub endpoints: Vec<EndpointDoc>,
    pub sources: Vec<SourceDoc>,
}

impl DocsResponse {
    pub fn new(sources: &[SourceId]) -> Self {
        let endpoints = vec![
            EndpointDoc {
                method: "GET",
                path: "/api/part/:partNumber",
                description: "Aggregated prices, alternatives and risk for a part number",
            },
            EndpointDoc {
                method: "GET",
                path: "/health",
                description: "Service health, cache size and configured sources",
            },
            EndpointDoc {
                method: "GET",
                path: "/stats",
                description: "Cache hit/miss statistics",
            },
            EndpointDoc {
                method: "DELETE",
                path: "/cache/:partNumber",
                description: "Drop every cached lookup for a part number",
            },
            EndpointDoc {
                method: "DELETE",
                path: "/cache",
                description: "Drop the entire cache",
            },
            EndpointDoc {
                method: "GET",
                path: "/docs",
                description: "This description",
            },
        ];

        Self {
            title: "Part price comparison API",
            endpoints,
            sources: sources.iter().copied().map(SourceDoc::from).collect(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
