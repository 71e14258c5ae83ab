//! Vendor payload formats
//!
//! Each vendor answers with its own JSON shape, currency and lead-time
//! vocabulary. A [`VendorFormat`] knows one of those shapes: how to turn it
//! into a [`PriceQuote`] and how to fabricate a realistic one for the
//! simulated remote.

mod arrow;
mod digikey;
mod icchax;
mod ickey;
mod lcsc;
mod mouser;

use rand::Rng;
use serde_json::Value;

use crate::error::{LookupError, LookupResult};
use crate::models::{PriceQuote, IN_STOCK};
use crate::sources::{PriceBand, SourceId};

pub use arrow::ArrowFormat;
pub use digikey::DigiKeyFormat;
pub use icchax::IcChaxFormat;
pub use ickey::IckeyFormat;
pub use lcsc::LcscFormat;
pub use mouser::MouserFormat;

/// In-stock marker used by the Chinese distributors.
pub const XIANHUO: &str = "现货";

/// One vendor's response format.
pub trait VendorFormat: Send + Sync {
    /// The vendor this format belongs to.
    fn source(&self) -> SourceId;

    /// Normalizes a raw payload into a live quote.
    ///
    /// # Errors
    /// `LookupError::NotFound` when the payload says the part is unknown,
    /// `LookupError::Malformed` when it cannot be parsed.
    fn normalize(&self, payload: Value) -> LookupResult<PriceQuote>;

    /// Produces a payload shaped like the vendor's real answer.
    fn simulate(&self) -> Value;
}

/// Returns the payload format for `source`.
pub fn format_for(source: SourceId) -> &'static dyn VendorFormat {
    match source {
        SourceId::Lcsc => &LcscFormat,
        SourceId::DigiKey => &DigiKeyFormat,
        SourceId::Ickey => &IckeyFormat,
        SourceId::IcChax => &IcChaxFormat,
        SourceId::Mouser => &MouserFormat,
        SourceId::Arrow => &ArrowFormat,
    }
}

// == Field Normalization ==

/// Parses a vendor price string into a non-negative amount.
pub(crate) fn parse_price(raw: &str) -> LookupResult<f64> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| LookupError::Malformed(format!("invalid price '{}'", raw)))?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(LookupError::Malformed(format!("invalid price '{}'", raw)));
    }
    Ok(amount)
}

/// Parses a stock count given as text.
pub(crate) fn parse_stock(raw: &str) -> LookupResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| LookupError::Malformed(format!("invalid stock '{}'", raw)))
}

/// Maps every vendor's in-stock wording to [`IN_STOCK`]; anything else is a
/// delivery estimate and passes through trimmed.
pub fn normalize_lead_time(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == XIANHUO
        || trimmed.eq_ignore_ascii_case("in stock")
        || trimmed.eq_ignore_ascii_case(IN_STOCK)
    {
        IN_STOCK.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Builds a live quote for `source` from raw vendor fields.
pub(crate) fn build_quote(
    source: SourceId,
    price: &str,
    stock: u64,
    lead_time: &str,
) -> LookupResult<PriceQuote> {
    Ok(PriceQuote::live(
        source.display_name(),
        source.currency(),
        parse_price(price)?,
        stock,
        normalize_lead_time(lead_time),
    ))
}

pub(crate) fn not_found(source: SourceId) -> LookupError {
    LookupError::NotFound(format!("{} has no listing", source.display_name()))
}

// == Simulation Helpers ==

/// Random price inside the band, two decimals, as vendors send it.
pub(crate) fn simulated_price(band: PriceBand) -> String {
    let amount = rand::thread_rng().gen_range(band.base..band.upper());
    format!("{:.2}", amount)
}

pub(crate) fn simulated_stock(min: u64, span: u64) -> u64 {
    rand::thread_rng().gen_range(min..min + span)
}

/// `in_stock` with probability `p_in_stock`, otherwise an `a-b days` range.
pub(crate) fn simulated_delivery(in_stock: &str, p_in_stock: f64) -> String {
    let mut rng = rand::thread_rng();
    if rng.gen_bool(p_in_stock) {
        in_stock.to_string()
    } else {
        let from = rng.gen_range(1..=3);
        let to = from + rng.gen_range(1..=2);
        format!("{}-{} days", from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(" 1.25 ").unwrap(), 1.25);
        assert!(matches!(parse_price("abc"), Err(LookupError::Malformed(_))));
        assert!(matches!(parse_price("-1"), Err(LookupError::Malformed(_))));
        assert!(matches!(parse_price("NaN"), Err(LookupError::Malformed(_))));
    }

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock("4200").unwrap(), 4200);
        assert!(parse_stock("-3").is_err());
        assert!(parse_stock("many").is_err());
    }

    #[test]
    fn test_normalize_lead_time() {
        assert_eq!(normalize_lead_time(XIANHUO), IN_STOCK);
        assert_eq!(normalize_lead_time("In Stock"), IN_STOCK);
        assert_eq!(normalize_lead_time("IN STOCK"), IN_STOCK);
        assert_eq!(normalize_lead_time(" 2-3 days "), "2-3 days");
    }

    #[test]
    fn test_every_format_normalizes_its_own_simulation() {
        for source in SourceId::ALL {
            let format = format_for(source);
            assert_eq!(format.source(), source);

            let quote = format.normalize(format.simulate()).unwrap();
            assert_eq!(quote.source_name, source.display_name());
            assert!(quote.price.starts_with(source.currency()));

            let amount: f64 = quote.price[source.currency().len()..].parse().unwrap();
            assert!(source.price_band().contains(amount), "{} out of band", quote.price);
            assert!(quote.stock.parse::<u64>().is_ok());
        }
    }

    #[test]
    fn test_simulated_delivery_shape() {
        for _ in 0..50 {
            let delivery = simulated_delivery("In Stock", 0.5);
            assert!(delivery == "In Stock" || delivery.ends_with(" days"));
        }
    }
}
