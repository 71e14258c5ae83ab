//! Fallback Quotes
//!
//! Local synthesis of a plausible quote for a vendor whose lookup failed.

use rand::Rng;

use crate::models::{format_price, PriceQuote, QuoteOrigin, IN_STOCK};
use crate::sources::SourceId;

/// Synthesizes stand-in quotes; when disabled it emits
/// [`PriceQuote::unavailable`] placeholders instead.
#[derive(Debug, Clone, Copy)]
pub struct FallbackQuoter {
    enabled: bool,
}

impl FallbackQuoter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns a quote for `source`, randomized within its price band.
    ///
    /// Fallback quotes are never cached: each call draws new values.
    pub fn quote(&self, source: SourceId) -> PriceQuote {
        if !self.enabled {
            return PriceQuote::unavailable(source.display_name());
        }

        let band = source.price_band();
        let mut rng = rand::thread_rng();
        let price = rng.gen_range(band.base..band.upper());
        let stock: u64 = rng.gen_range(2000..12000);
        let lead_time = if rng.gen_bool(0.5) {
            IN_STOCK.to_string()
        } else {
            let from = rng.gen_range(1..=3);
            let to = rng.gen_range(2..=4).max(from + 1);
            format!("{}-{} days", from, to)
        };

        PriceQuote {
            source_name: source.display_name().to_string(),
            price: format_price(source.currency(), price),
            stock: stock.to_string(),
            lead_time,
            origin: QuoteOrigin::Fallback,
        }
    }
}

impl Default for FallbackQuoter {
    fn default() -> Self {
        Self::new(true)
    }
}
