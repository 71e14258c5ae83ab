//! ICChax: `{ code, data: { price, stock, delivery } }`, prices in yuan.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{
    build_quote, not_found, simulated_delivery, simulated_price, simulated_stock, VendorFormat,
    XIANHUO,
};
use crate::error::LookupResult;
use crate::models::PriceQuote;
use crate::sources::SourceId;

#[derive(Debug, Deserialize)]
struct IcChaxResponse {
    code: u16,
    data: Option<IcChaxProduct>,
}

#[derive(Debug, Deserialize)]
struct IcChaxProduct {
    price: String,
    stock: u64,
    delivery: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IcChaxFormat;

impl VendorFormat for IcChaxFormat {
    fn source(&self) -> SourceId {
        SourceId::IcChax
    }

    fn normalize(&self, payload: Value) -> LookupResult<PriceQuote> {
        let response: IcChaxResponse = serde_json::from_value(payload)?;
        match response {
            IcChaxResponse {
                code: 200,
                data: Some(product),
            } => build_quote(self.source(), &product.price, product.stock, &product.delivery),
            _ => Err(not_found(self.source())),
        }
    }

    fn simulate(&self) -> Value {
        json!({
            "code": 200,
            "data": {
                "price": simulated_price(self.source().price_band()),
                "stock": simulated_stock(4000, 8000),
                "delivery": simulated_delivery(XIANHUO, 0.5)
            }
        })
    }
}
