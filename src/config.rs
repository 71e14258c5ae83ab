//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::sources::SourceId;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Default cache TTL in milliseconds
    pub default_ttl_ms: u64,
    /// Price sources in comparison order
    pub sources: Vec<SourceId>,
    /// Upper bound on a single remote lookup in milliseconds
    pub lookup_timeout_ms: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Whether failed sources get a synthesized quote
    pub fallback_enabled: bool,
    /// Fraction of simulated lookups that fail
    pub simulated_failure_rate: f64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_TTL_MS` - Default cache TTL in milliseconds (default: 3600000)
    /// - `PRICE_SOURCES` - Comma-separated source ids (default: all six, in
    ///   `lcsc,digikey,ickey,icchax,mouser,arrow` order)
    /// - `LOOKUP_TIMEOUT_MS` - Per-lookup timeout in milliseconds (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `FALLBACK_ENABLED` - Synthesize quotes for failed sources (default: true)
    /// - `SIMULATED_FAILURE_RATE` - Simulated lookup failure rate (default: 0.0)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            default_ttl_ms: parse_var("DEFAULT_TTL_MS").unwrap_or(defaults.default_ttl_ms),
            sources: env::var("PRICE_SOURCES")
                .map(|list| parse_sources(&list))
                .unwrap_or(defaults.sources),
            lookup_timeout_ms: parse_var("LOOKUP_TIMEOUT_MS")
                .unwrap_or(defaults.lookup_timeout_ms),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            fallback_enabled: parse_var("FALLBACK_ENABLED").unwrap_or(defaults.fallback_enabled),
            simulated_failure_rate: parse_var("SIMULATED_FAILURE_RATE")
                .unwrap_or(defaults.simulated_failure_rate),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            default_ttl_ms: 3_600_000,
            sources: SourceId::ALL.to_vec(),
            lookup_timeout_ms: 3_000,
            cleanup_interval: 60,
            fallback_enabled: true,
            simulated_failure_rate: 0.0,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Parses an ordered source list. Unknown ids are skipped with a warning,
/// repeats keep their first position, and an empty result means all sources.
pub fn parse_sources(list: &str) -> Vec<SourceId> {
    let mut sources = Vec::new();

    for raw in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match raw.parse::<SourceId>() {
            Ok(source) if !sources.contains(&source) => sources.push(source),
            Ok(_) => {}
            Err(err) => warn!("Ignoring price source: {}", err),
        }
    }

    if sources.is_empty() {
        warn!("No usable price sources configured, using all");
        return SourceId::ALL.to_vec();
    }
    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.default_ttl(), Duration::from_secs(3600));
        assert_eq!(config.sources.len(), 6);
        assert_eq!(config.sources[0], SourceId::Lcsc);
        assert_eq!(config.lookup_timeout(), Duration::from_secs(3));
        assert!(config.fallback_enabled);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        for var in [
            "SERVER_PORT",
            "DEFAULT_TTL_MS",
            "PRICE_SOURCES",
            "LOOKUP_TIMEOUT_MS",
            "CLEANUP_INTERVAL",
            "FALLBACK_ENABLED",
            "SIMULATED_FAILURE_RATE",
        ] {
            env::remove_var(var);
        }

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.default_ttl_ms, 3_600_000);
        assert_eq!(config.sources, SourceId::ALL.to_vec());
        assert_eq!(config.cleanup_interval, 60);
        assert_eq!(config.simulated_failure_rate, 0.0);
    }

    #[test]
    fn test_parse_sources_keeps_order() {
        assert_eq!(
            parse_sources("mouser, LCSC ,arrow"),
            vec![SourceId::Mouser, SourceId::Lcsc, SourceId::Arrow]
        );
    }

    #[test]
    fn test_parse_sources_skips_unknown_and_duplicates() {
        assert_eq!(
            parse_sources("arrow,octopart,arrow,digikey"),
            vec![SourceId::Arrow, SourceId::DigiKey]
        );
    }

    #[test]
    fn test_parse_sources_empty_means_all() {
        assert_eq!(parse_sources(" , "), SourceId::ALL.to_vec());
        assert_eq!(parse_sources("octopart"), SourceId::ALL.to_vec());
    }
}
