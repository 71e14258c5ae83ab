//! Part data models
//!
//! Normalized records produced by the adapters and the aggregated result
//! returned to callers. Field names serialize in camelCase, which is what the
//! browser extension consumes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized lead-time value meaning the part ships without waiting.
pub const IN_STOCK: &str = "in-stock";

/// Value used for every risk field when nothing is known about a part.
pub const UNKNOWN: &str = "unknown";

// == Quote Origin ==
/// Where a [`PriceQuote`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuoteOrigin {
    /// Normalized from the vendor's own answer (possibly served from cache)
    Live,
    /// Synthesized locally after the vendor lookup failed
    Fallback,
    /// Vendor lookup failed and synthesis is disabled
    Unavailable,
}

// == Price Quote ==
/// One vendor's price, stock and lead time for a part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Display name of the source
    pub source_name: String,
    /// Currency-prefixed decimal, e.g. `$1.25`
    pub price: String,
    /// Non-negative integer rendered as a string
    pub stock: String,
    /// [`IN_STOCK`] or a free-text delivery estimate
    pub lead_time: String,
    pub origin: QuoteOrigin,
}

impl PriceQuote {
    /// Builds a live quote from already-normalized fields.
    pub fn live(
        source_name: impl Into<String>,
        currency: &str,
        price: f64,
        stock: u64,
        lead_time: impl Into<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            price: format_price(currency, price),
            stock: stock.to_string(),
            lead_time: lead_time.into(),
            origin: QuoteOrigin::Live,
        }
    }

    /// Placeholder for a source that produced nothing.
    pub fn unavailable(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            price: "N/A".to_string(),
            stock: "0".to_string(),
            lead_time: "unavailable".to_string(),
            origin: QuoteOrigin::Unavailable,
        }
    }
}

/// Renders a price with its currency symbol and two decimals.
pub fn format_price(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}

// == Alternatives ==
/// How a substitute part relates to the queried one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    Direct,
    Parametric,
    Functional,
    Upgrade,
    LowPower,
    Other,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RelationKind::Direct => "direct",
            RelationKind::Parametric => "parametric",
            RelationKind::Functional => "functional",
            RelationKind::Upgrade => "upgrade",
            RelationKind::LowPower => "lowPower",
            RelationKind::Other => "other",
        };
        f.write_str(label)
    }
}

/// A substitute part suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeRecord {
    pub model: String,
    pub relation_kind: RelationKind,
    /// Who suggested the substitute
    pub source: String,
    /// Differences to be aware of when substituting
    pub notes: String,
}

impl AlternativeRecord {
    pub fn new(
        model: impl Into<String>,
        relation_kind: RelationKind,
        source: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            relation_kind,
            source: source.into(),
            notes: notes.into(),
        }
    }
}

// == Risk ==
/// Lifecycle and compliance information for a part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRecord {
    pub lifecycle_status: String,
    pub compliance_status: String,
    pub overall_status: String,
}

impl RiskRecord {
    pub fn new(
        lifecycle_status: impl Into<String>,
        compliance_status: impl Into<String>,
        overall_status: impl Into<String>,
    ) -> Self {
        Self {
            lifecycle_status: lifecycle_status.into(),
            compliance_status: compliance_status.into(),
            overall_status: overall_status.into(),
        }
    }

    /// Record with every field set to [`UNKNOWN`].
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN, UNKNOWN)
    }

    pub fn is_unknown(&self) -> bool {
        self == &Self::unknown()
    }
}

impl Default for RiskRecord {
    fn default() -> Self {
        Self::unknown()
    }
}

// == Aggregated Result ==
/// Everything known about one part number, assembled fresh per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    pub part_number: String,
    /// One quote per configured source, in configured order
    pub prices: Vec<PriceQuote>,
    pub alternatives: Vec<AlternativeRecord>,
    pub risk: RiskRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_quote_formats_price_and_stock() {
        let quote = PriceQuote::live("DigiKey", "$", 1.5, 4200, IN_STOCK);

        assert_eq!(quote.price, "$1.50");
        assert_eq!(quote.stock, "4200");
        assert_eq!(quote.lead_time, IN_STOCK);
        assert_eq!(quote.origin, QuoteOrigin::Live);
    }

    #[test]
    fn test_quote_serializes_camel_case() {
        let quote = PriceQuote::live("LCSC", "¥", 3.0, 10, "2-3 days");
        let json = serde_json::to_value(&quote).unwrap();

        assert_eq!(json["sourceName"], "LCSC");
        assert_eq!(json["leadTime"], "2-3 days");
        assert_eq!(json["origin"], "live");
    }

    #[test]
    fn test_relation_kind_serialization() {
        let json = serde_json::to_string(&RelationKind::LowPower).unwrap();
        assert_eq!(json, "\"lowPower\"");
        assert_eq!(RelationKind::LowPower.to_string(), "lowPower");
    }

    #[test]
    fn test_unknown_risk() {
        let risk = RiskRecord::default();
        assert!(risk.is_unknown());
        assert_eq!(risk.lifecycle_status, UNKNOWN);
        assert!(!RiskRecord::new("in production", UNKNOWN, UNKNOWN).is_unknown());
    }

    #[test]
    fn test_unavailable_quote() {
        let quote = PriceQuote::unavailable("Arrow");
        assert_eq!(quote.origin, QuoteOrigin::Unavailable);
        assert_eq!(quote.stock, "0");
    }
}
