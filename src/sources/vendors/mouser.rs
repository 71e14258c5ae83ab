//! Mouser part search:
//! `{ SearchResults: { Parts: [{ PriceBreaks: [{ Price }], Availability, LeadTime }] } }`.
//!
//! Availability arrives as text and the first price break is the unit price.

use serde::Deserialize;
use serde_json::{json, Value};

use super::{
    build_quote, not_found, parse_stock, simulated_delivery, simulated_price, simulated_stock,
    VendorFormat,
};
use crate::error::LookupResult;
use crate::models::PriceQuote;
use crate::sources::SourceId;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MouserResponse {
    search_results: Option<MouserResults>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MouserResults {
    #[serde(default)]
    parts: Vec<MouserPart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MouserPart {
    #[serde(default)]
    price_breaks: Vec<MouserPriceBreak>,
    availability: String,
    lead_time: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MouserPriceBreak {
    price: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MouserFormat;

impl VendorFormat for MouserFormat {
    fn source(&self) -> SourceId {
        SourceId::Mouser
    }

    fn normalize(&self, payload: Value) -> LookupResult<PriceQuote> {
        let response: MouserResponse = serde_json::from_value(payload)?;
        let part = response
            .search_results
            .and_then(|results| results.parts.into_iter().next())
            .ok_or_else(|| not_found(self.source()))?;
        let unit_price = part
            .price_breaks
            .first()
            .ok_or_else(|| not_found(self.source()))?;

        build_quote(
            self.source(),
            &unit_price.price,
            parse_stock(&part.availability)?,
            &part.lead_time,
        )
    }

    fn simulate(&self) -> Value {
        json!({
            "SearchResults": {
                "Parts": [{
                    "PriceBreaks": [{ "Price": simulated_price(self.source().price_band()) }],
                    "Availability": simulated_stock(2000, 10000).to_string(),
                    "LeadTime": simulated_delivery("In Stock", 0.6)
                }]
            }
        })
    }
}
