//! Data models for the part lookup service
//!
//! Domain records produced by the adapters plus the DTOs used for
//! serializing HTTP request and response bodies.

pub mod part;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use part::{
    format_price, AggregatedResult, AlternativeRecord, PriceQuote, QuoteOrigin, RelationKind,
    RiskRecord, IN_STOCK, UNKNOWN,
};
pub use requests::{PartNumber, MAX_PART_NUMBER_LENGTH};
pub use responses::{
    ApiResponse, CacheHealth, DocsResponse, ErrorResponse, HealthResponse, InvalidateResponse,
    StatsResponse,
};
