//! Price Sources Module
//!
//! One adapter per vendor, all sharing the same capability: turn a part
//! number into a normalized [`PriceQuote`](crate::models::PriceQuote).
//!
//! # Layout
//! - [`SourceId`] - the closed set of known vendors and their static traits
//! - [`vendors`] - per-vendor payload shapes and normalization
//! - [`remote`] - the injectable remote-lookup capability
//! - [`SourceAdapter`] - cached, time-bounded `fetch_price` for one vendor
//! - [`SourceRegistry`] - configured adapters, in configured order
//! - [`FallbackQuoter`] - local quote synthesis when a vendor fails

mod adapter;
mod fallback;
mod registry;
pub mod remote;
pub mod simulated;
pub mod vendors;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

pub use adapter::SourceAdapter;
pub use fallback::FallbackQuoter;
pub use registry::SourceRegistry;
pub use remote::{Endpoint, RemoteLookup};
pub use simulated::SimulatedRemote;

// == Price Band ==
/// Range used to synthesize plausible fallback prices: `[base, base + range)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    pub base: f64,
    pub range: f64,
}

impl PriceBand {
    pub const fn new(base: f64, range: f64) -> Self {
        Self { base, range }
    }

    pub fn upper(&self) -> f64 {
        self.base + self.range
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.base && price <= self.upper()
    }
}

// == Source Id ==
/// A known pricing vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    Lcsc,
    DigiKey,
    Ickey,
    IcChax,
    Mouser,
    Arrow,
}

impl SourceId {
    /// Every vendor, in the default comparison order.
    pub const ALL: [SourceId; 6] = [
        SourceId::Lcsc,
        SourceId::DigiKey,
        SourceId::Ickey,
        SourceId::IcChax,
        SourceId::Mouser,
        SourceId::Arrow,
    ];

    /// Identifier used in configuration.
    pub fn id(&self) -> &'static str {
        match self {
            SourceId::Lcsc => "lcsc",
            SourceId::DigiKey => "digikey",
            SourceId::Ickey => "ickey",
            SourceId::IcChax => "icchax",
            SourceId::Mouser => "mouser",
            SourceId::Arrow => "arrow",
        }
    }

    /// Name shown to users and used in cache keys.
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceId::Lcsc => "LCSC",
            SourceId::DigiKey => "DigiKey",
            SourceId::Ickey => "ICKey",
            SourceId::IcChax => "ICChax",
            SourceId::Mouser => "Mouser",
            SourceId::Arrow => "Arrow",
        }
    }

    /// Currency symbol the vendor quotes in.
    pub fn currency(&self) -> &'static str {
        match self {
            SourceId::Lcsc | SourceId::Ickey | SourceId::IcChax => "¥",
            SourceId::DigiKey | SourceId::Mouser | SourceId::Arrow => "$",
        }
    }

    /// Vendor API the production adapter would call.
    pub fn api_endpoint(&self) -> &'static str {
        match self {
            SourceId::Lcsc => "https://api.szlcsc.com/product/detail",
            SourceId::DigiKey => "https://api.digikey.com/products/v4/search",
            SourceId::Ickey => "https://api.ickey.com/product/search",
            SourceId::IcChax => "https://api.icchax.com/product/detail",
            SourceId::Mouser => "https://api.mouser.com/api/v1/search/partnumber",
            SourceId::Arrow => "https://api.arrow.com/products/search",
        }
    }

    /// Typical unit price band, used for fallback and simulated quotes.
    pub fn price_band(&self) -> PriceBand {
        match self {
            SourceId::Lcsc => PriceBand::new(2.0, 10.0),
            SourceId::DigiKey => PriceBand::new(0.5, 2.0),
            SourceId::Ickey => PriceBand::new(1.5, 9.0),
            SourceId::IcChax => PriceBand::new(3.0, 12.0),
            SourceId::Mouser => PriceBand::new(1.0, 8.0),
            SourceId::Arrow => PriceBand::new(1.2, 9.5),
        }
    }

    /// Response time of the simulated vendor API.
    pub fn simulated_latency(&self) -> Duration {
        let ms = match self {
            SourceId::Lcsc | SourceId::IcChax => 200,
            SourceId::Ickey => 250,
            SourceId::DigiKey | SourceId::Arrow => 300,
            SourceId::Mouser => 350,
        };
        Duration::from_millis(ms)
    }

    /// Cache key for this vendor's quote of `part_number`.
    pub fn cache_key(&self, part_number: &str) -> String {
        format!("{}:{}", self.display_name(), part_number)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SourceId {
    type Err = String;

    /// Accepts the configuration id or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        SourceId::ALL
            .into_iter()
            .find(|id| {
                id.id().eq_ignore_ascii_case(needle) || id.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("unknown price source '{}'", needle))
    }
}

/// Cache key for the alternatives of `part_number`.
pub fn alternatives_cache_key(part_number: &str) -> String {
    format!("alt:{}", part_number)
}

/// Cache key for the risk record of `part_number`.
pub fn risk_cache_key(part_number: &str) -> String {
    format!("risk:{}", part_number)
}

/// Every cache key that can hold data for `part_number`, across all known
/// vendors whether configured or not.
pub fn cache_keys_for(part_number: &str) -> Vec<String> {
    SourceId::ALL
        .iter()
        .map(|id| id.cache_key(part_number))
        .chain([
            alternatives_cache_key(part_number),
            risk_cache_key(part_number),
        ])
        .collect()
}
