//! Error types for the part lookup service
//!
//! Provides unified error handling using thiserror.
//!
//! Two layers exist: [`LookupError`] describes a single adapter failing to
//! produce data and never crosses the aggregator, while [`ServiceError`] is
//! what the HTTP boundary can actually return.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Message returned to callers when aggregation fails as a whole.
pub const RETRY_LATER_MESSAGE: &str = "Query failed, please retry later";

// == Lookup Error Enum ==
/// Failure of a single remote lookup (price source, alternatives or risk).
///
/// Every variant is recovered locally by a fallback; none of them reach the
/// caller of the query service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// The remote answered but has no data for the part number
    #[error("No data for part number: {0}")]
    NotFound(String),

    /// The remote did not answer within the configured bound
    #[error("Lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The remote answered with a payload we could not normalize
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// The remote could not be reached
    #[error("Transport failure: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Malformed(err.to_string())
    }
}

// == Service Error Enum ==
/// Unified error type for the query service boundary.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Caller supplied an empty or otherwise invalid part number
    #[error("Invalid part number: {0}")]
    MalformedRequest(String),

    /// Orchestration itself failed; no partial data is returned
    #[error("Aggregation fault: {0}")]
    AggregationFault(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServiceError::MalformedRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            // Fault details stay in the logs
            ServiceError::AggregationFault(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                RETRY_LATER_MESSAGE.to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Aliases ==
/// Convenience Result type for the query service.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Result of a single remote lookup.
pub type LookupResult<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_request_is_bad_request() {
        let response = ServiceError::MalformedRequest("empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_aggregation_fault_is_internal_error() {
        let response = ServiceError::AggregationFault("task panicked".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_serde_error_maps_to_malformed() {
        let err = serde_json::from_str::<u64>("not a number").unwrap_err();
        assert!(matches!(LookupError::from(err), LookupError::Malformed(_)));
    }
}
