//! LCSC: `{ code, data: { price, stock, leadTime } }`, prices in yuan.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{build_quote, not_found, simulated_price, simulated_stock, VendorFormat, XIANHUO};
use crate::error::LookupResult;
use crate::models::PriceQuote;
use crate::sources::SourceId;

#[derive(Debug, Deserialize)]
struct LcscResponse {
    code: u16,
    data: Option<LcscProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LcscProduct {
    price: String,
    stock: u64,
    lead_time: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LcscFormat;

impl VendorFormat for LcscFormat {
    fn source(&self) -> SourceId {
        SourceId::Lcsc
    }

    fn normalize(&self, payload: Value) -> LookupResult<PriceQuote> {
        let response: LcscResponse = serde_json::from_value(payload)?;
        match response {
            LcscResponse {
                code: 200,
                data: Some(product),
            } => build_quote(self.source(), &product.price, product.stock, &product.lead_time),
            _ => Err(not_found(self.source())),
        }
    }

    fn simulate(&self) -> Value {
        json!({
            "code": 200,
            "data": {
                "price": simulated_price(self.source().price_band()),
                "stock": simulated_stock(5000, 10000),
                "leadTime": XIANHUO
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use crate::models::IN_STOCK;

    #[test]
    fn test_normalize() {
        let quote = LcscFormat
            .normalize(json!({"code": 200, "data": {"price": "5.3", "stock": 8000, "leadTime": "现货"}}))
            .unwrap();

        assert_eq!(quote.source_name, "LCSC");
        assert_eq!(quote.price, "¥5.30");
        assert_eq!(quote.stock, "8000");
        assert_eq!(quote.lead_time, IN_STOCK);
    }

    #[test]
    fn test_error_code_is_not_found() {
        let result = LcscFormat.normalize(json!({"code": 404, "data": null}));
        assert!(matches!(result, Err(LookupError::NotFound(_))));
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        let result = LcscFormat.normalize(json!({"code": 200, "data": {"price": "1.00"}}));
        assert!(matches!(result, Err(LookupError::Malformed(_))));
    }
}
