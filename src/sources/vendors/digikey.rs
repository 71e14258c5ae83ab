//! DigiKey product search: `{ Products: [{ UnitPrice, QuantityAvailable, LeadTime }] }`.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{
    build_quote, not_found, simulated_delivery, simulated_price, simulated_stock, VendorFormat,
};
use crate::error::LookupResult;
use crate::models::PriceQuote;
use crate::sources::SourceId;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DigiKeySearch {
    #[serde(default)]
    products: Vec<DigiKeyProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DigiKeyProduct {
    unit_price: String,
    quantity_available: u64,
    lead_time: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DigiKeyFormat;

impl VendorFormat for DigiKeyFormat {
    fn source(&self) -> SourceId {
        SourceId::DigiKey
    }

    fn normalize(&self, payload: Value) -> LookupResult<PriceQuote> {
        let search: DigiKeySearch = serde_json::from_value(payload)?;
        // First hit is the exact match
        let product = search
            .products
            .into_iter()
            .next()
            .ok_or_else(|| not_found(self.source()))?;

        build_quote(
            self.source(),
            &product.unit_price,
            product.quantity_available,
            &product.lead_time,
        )
    }

    fn simulate(&self) -> Value {
        json!({
            "Products": [{
                "UnitPrice": simulated_price(self.source().price_band()),
                "QuantityAvailable": simulated_stock(2000, 8000),
                "LeadTime": simulated_delivery("In Stock", 0.5)
            }]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;

    #[test]
    fn test_normalize_takes_first_product() {
        let quote = DigiKeyFormat
            .normalize(json!({"Products": [
                {"UnitPrice": "0.89", "QuantityAvailable": 3100, "LeadTime": "1-2 days"},
                {"UnitPrice": "9.99", "QuantityAvailable": 1, "LeadTime": "In Stock"}
            ]}))
            .unwrap();

        assert_eq!(quote.price, "$0.89");
        assert_eq!(quote.stock, "3100");
        assert_eq!(quote.lead_time, "1-2 days");
    }

    #[test]
    fn test_empty_products_is_not_found() {
        let result = DigiKeyFormat.normalize(json!({"Products": []}));
        assert!(matches!(result, Err(LookupError::NotFound(_))));
    }

    #[test]
    fn test_negative_stock_is_malformed() {
        let result = DigiKeyFormat.normalize(json!({"Products": [
            {"UnitPrice": "0.89", "QuantityAvailable": -5, "LeadTime": "In Stock"}
        ]}));
        assert!(matches!(result, Err(LookupError::Malformed(_))));
    }
}
