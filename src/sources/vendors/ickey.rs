//! ICKey: `{ success, data: { items: [{ price, stock, delivery }] } }`.

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
struct IckeyResponse {
    success: bool,
    data: Option<IckeyData>,
}

#[derive(Debug, Deserialize)]
struct IckeyData {
    #[serde(default)]
    items: Vec<IckeyItem>,
}

#[derive(Debug, Deserialize)]
struct IckeyItem {
    price: String,
    stock: u64,
    delivery: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IckeyFormat;

impl VendorFormat for IckeyFormat {
    fn source(&self) -> SourceId {
        SourceId::Ickey
    }

    fn normalize(&self, payload: Value) -> LookupResult<PriceQuote> {
        let response: IckeyResponse = serde_json::from_value(payload)?;
        if !response.success {
            return Err(not_found(self.source()));
        }

        let item = response
            .data
            .and_then(|data| data.items.into_iter().next())
            .ok_or_else(|| not_found(self.source()))?;

        build_quote(self.source(), &item.price, item.stock, &item.delivery)
    }

    fn simulate(&self) -> Value {
        json!({
            "success": true,
            "data": {
                "items": [{
                    "price": simulated_price(self.source().price_band()),
                    "stock": simulated_stock(3000, 9000),
                    "delivery": simulated_delivery(XIANHUO, 0.4)
                }]
            }
        })
    }
}
