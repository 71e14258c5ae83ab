//! Remote Lookup Port
//!
//! The capability every adapter depends on to reach the outside world. In
//! production this is a vendor HTTP client; the service ships with
//! [`SimulatedRemote`](super::SimulatedRemote) and tests inject stubs.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::LookupResult;
use crate::sources::SourceId;

/// Which remote API a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// A vendor's price/stock API
    Price(SourceId),
    /// Substitute-part API
    Alternatives,
    /// Lifecycle/compliance API
    Risk,
}

impl Endpoint {
    /// Response time of the simulated API behind this endpoint.
    pub fn simulated_latency(&self) -> Duration {
        match self {
            Endpoint::Price(source) => source.simulated_latency(),
            Endpoint::Alternatives => Duration::from_millis(300),
            Endpoint::Risk => Duration::from_millis(250),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Price(source) => write!(f, "price/{}", source.id()),
            Endpoint::Alternatives => f.write_str("alternatives"),
            Endpoint::Risk => f.write_str("risk"),
        }
    }
}

/// Fetches a raw JSON payload for a part number from one endpoint.
///
/// Implementations return the vendor's payload untouched; normalization is
/// the adapter's job. A vendor answering "no such part" may either return
/// its own not-found payload or `LookupError::NotFound`.
#[async_trait]
pub trait RemoteLookup: Send + Sync + fmt::Debug {
    /// Performs one lookup.
    ///
    /// # Errors
    /// Returns a `LookupError` when the remote cannot be reached or has
    /// nothing for the part.
    async fn fetch(&self, endpoint: Endpoint, part_number: &str) -> LookupResult<Value>;
}
