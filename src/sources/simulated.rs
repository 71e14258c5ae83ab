//! Simulated Remote
//!
//! Stand-in for the vendor APIs: answers every endpoint after that API's
//! typical latency, with vendor-shaped randomized quotes and the seed
//! catalog for alternatives and risk.

use async_trait::async_trait;
use rand::Rng;
use serde_json::Value;
use tracing::debug;

use crate::error::{LookupError, LookupResult};
use crate::insights::catalog;
use crate::sources::vendors::format_for;
use crate::sources::{Endpoint, RemoteLookup};

/// Demo implementation of [`RemoteLookup`].
#[derive(Debug, Clone)]
pub struct SimulatedRemote {
    failure_rate: f64,
    latency: bool,
}

impl SimulatedRemote {
    /// Never fails, answers with realistic latency.
    pub fn new() -> Self {
        Self {
            failure_rate: 0.0,
            latency: true,
        }
    }

    /// Fails the given fraction of lookups with a transport error.
    /// The rate is clamped to `[0, 1]`.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    /// Answers immediately.
    pub fn without_latency(mut self) -> Self {
        self.latency = false;
        self
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    fn should_fail(&self) -> bool {
        self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate)
    }
}

impl Default for SimulatedRemote {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteLookup for SimulatedRemote {
    async fn fetch(&self, endpoint: Endpoint, part_number: &str) -> LookupResult<Value> {
        if self.latency {
            tokio::time::sleep(endpoint.simulated_latency()).await;
        }
        if self.should_fail() {
            debug!(%endpoint, part_number, "simulated failure");
            return Err(LookupError::Transport(format!(
                "simulated outage of {}",
                endpoint
            )));
        }

        let payload = match endpoint {
            Endpoint::Price(source) => format_for(source).simulate(),
            Endpoint::Alternatives => {
                serde_json::to_value(catalog::alternatives_for(part_number))?
            }
            Endpoint::Risk => match catalog::risk_for(part_number) {
                Some(risk) => serde_json::to_value(risk)?,
                None => return Err(LookupError::NotFound(part_number.to_string())),
            },
        };
        Ok(payload)
    }
}
