//! Arrow: `{ status, data: { products: [{ price, stock, delivery }] } }`.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{
    build_quote, not_found, simulated_delivery, simulated_price, simulated_stock, VendorFormat,
};
use crate::error::LookupResult;
use crate::models::PriceQuote;
use crate::sources::SourceId;

#[derive(Debug, Deserialize)]
struct ArrowResponse {
    status: String,
    data: Option<ArrowData>,
}

#[derive(Debug, Deserialize)]
struct ArrowData {
    #[serde(default)]
    products: Vec<ArrowProduct>,
}

#[derive(Debug, Deserialize)]
struct ArrowProduct {
    price: String,
    stock: u64,
    delivery: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArrowFormat;

impl VendorFormat for ArrowFormat {
    fn source(&self) -> SourceId {
        SourceId::Arrow
    }

    fn normalize(&self, payload: Value) -> LookupResult<PriceQuote> {
        let response: ArrowResponse = serde_json::from_value(payload)?;
        if response.status != "success" {
            return Err(not_found(self.source()));
        }

        let product = response
            .data
            .and_then(|data| data.products.into_iter().next())
            .ok_or_else(|| not_found(self.source()))?;

        build_quote(self.source(), &product.price, product.stock, &product.delivery)
    }

    fn simulate(&self) -> Value {
        json!({
            "status": "success",
            "data": {
                "products": [{
                    "price": simulated_price(self.source().price_band()),
                    "stock": simulated_stock(3000, 9000),
                    "delivery": simulated_delivery("In Stock", 0.5)
                }]
            }
        })
    }
}
