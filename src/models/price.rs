use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One retailer's price for a model, as seen during a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub retailer: String,
    pub price: Decimal,
    pub url: String,
}

impl PriceObservation {
    pub fn new(retailer: impl Into<String>, price: Decimal, url: impl Into<String>) -> Self {
        Self {
            retailer: retailer.into(),
            price,
            url: url.into(),
        }
    }
}

/// Model name => observations, in the order they were collected.
pub type Snapshot = IndexMap<String, Vec<PriceObservation>>;
