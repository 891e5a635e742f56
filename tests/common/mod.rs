#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use gpu_price_watch::models::{Database, PriceObservation, Snapshot};
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Fresh state directory, removed when the returned guard is dropped.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
}

pub fn obs(retailer: &str, price: Decimal) -> PriceObservation {
    let slug = retailer.to_lowercase().replace(' ', "");
    PriceObservation::new(retailer, price, format!("https://{slug}.example.com/item"))
}

pub fn snapshot(entries: Vec<(&str, Vec<PriceObservation>)>) -> Snapshot {
    entries
        .into_iter()
        .map(|(model, list)| (model.to_string(), list))
        .collect()
}

pub fn db_with(prices: Snapshot) -> Database {
    Database {
        last_update: Some(fixed_now()),
        prices,
        alerts: vec![],
    }
}
