//! API Module
//!
//! HTTP handlers and routing for the part lookup REST API.
//!
//! # Endpoints
//! - `GET /api/part/:partNumber` - Aggregated prices, alternatives and risk
//! - `GET /health` - Health check with cache and source summary
//! - `GET /stats` - Cache statistics
//! - `DELETE /cache/:partNumber` - Invalidate one part's cached lookups
//! - `DELETE /cache` - Clear the entire cache
//! - `GET /docs` - Endpoint and source description

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
