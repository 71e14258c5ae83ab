//! Cached Value Module
//!
//! One cache instance holds every kind of lookup result; this enum is the
//! stored value type and [`Cacheable`] moves typed results in and out of it.

use crate::models::{AlternativeRecord, PriceQuote, RiskRecord};

/// A memoized lookup result.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    Quote(PriceQuote),
    Alternatives(Vec<AlternativeRecord>),
    Risk(RiskRecord),
}

/// A lookup result type that can be stored in the shared cache.
pub trait Cacheable: Clone + Send + Sync + 'static {
    fn into_cached(self) -> CachedValue;

    /// Returns None if `value` holds a different kind of result.
    fn from_cached(value: CachedValue) -> Option<Self>;
}

impl Cacheable for PriceQuote {
    fn into_cached(self) -> CachedValue {
        CachedValue::Quote(self)
    }

    fn from_cached(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Quote(quote) => Some(quote),
            _ => None,
        }
    }
}

impl Cacheable for Vec<AlternativeRecord> {
    fn into_cached(self) -> CachedValue {
        CachedValue::Alternatives(self)
    }

    fn from_cached(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Alternatives(alternatives) => Some(alternatives),
            _ => None,
        }
    }
}

impl Cacheable for RiskRecord {
    fn into_cached(self) -> CachedValue {
        CachedValue::Risk(self)
    }

    fn from_cached(value: CachedValue) -> Option<Self> {
        match value {
            CachedValue::Risk(risk) => Some(risk),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mismatch_yields_none() {
        let cached = RiskRecord::unknown().into_cached();
        assert!(PriceQuote::from_cached(cached.clone()).is_none());
        assert_eq!(RiskRecord::from_cached(cached), Some(RiskRecord::unknown()));
    }
}
