//! Services Module
//!
//! The aggregation engine and the query service that fronts it.

mod aggregator;
mod query;

pub use aggregator::Aggregator;
pub use query::QueryService;
