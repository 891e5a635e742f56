use rust_decimal_macros::dec;

use crate::error::MonitorResult;
use crate::models::{PriceObservation, Snapshot};

/// Supplies the prices observed "now".
///
/// The rest of the pipeline only sees the returned [`Snapshot`], so a live
/// retailer-querying implementation can replace [`StaticPriceSource`]
/// without touching alerting or reporting.
pub trait PriceSource {
    fn name(&self) -> &str;

    fn fetch(&self) -> MonitorResult<Snapshot>;
}

#[derive(Debug, Clone)]
pub struct StaticPriceSource {
    prices: Snapshot,
}

impl StaticPriceSource {
    pub fn new(prices: Snapshot) -> Self {
        Self { prices }
    }

    /// Built-in GPU price table.
    pub fn gpus() -> Self {
        let mut prices = Snapshot::new();

        prices.insert(
            "RTX 4090".to_string(),
            vec![
                PriceObservation::new("Best Buy", dec!(1799.99), "https://www.bestbuy.com/site/nvidia-rtx-4090"),
                PriceObservation::new("Newegg", dec!(1759.99), "https://www.newegg.com/pny-rtx-4090"),
                PriceObservation::new("Amazon", dec!(1839.99), "https://amazon.com/dp/B0BHJF2RH2"),
            ],
        );
        prices.insert(
            "RTX 4080".to_string(),
            vec![
                PriceObservation::new("Best Buy", dec!(1099.99), "https://www.bestbuy.com/site/nvidia-rtx-4080"),
                PriceObservation::new("Newegg", dec!(1059.99), "https://www.newegg.com/msi-rtx-4080"),
                PriceObservation::new("Amazon", dec!(1129.99), "https://amazon.com/dp/B0BHHNV7K2"),
            ],
        );
        prices.insert(
            "RTX 4070 Ti Super".to_string(),
            vec![
                PriceObservation::new("Best Buy", dec!(799.99), "https://www.bestbuy.com/site/nvidia-rtx-4070-ti-super"),
                PriceObservation::new("Newegg", dec!(769.99), "https://www.newegg.com/asus-rtx-4070-ti-super"),
                PriceObservation::new("Amazon", dec!(789.99), "https://amazon.com/dp/B0CQGNSP8P"),
            ],
        );

        Self { prices }
    }
}

impl PriceSource for StaticPriceSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self) -> MonitorResult<Snapshot> {
        Ok(self.prices.clone())
    }
}
