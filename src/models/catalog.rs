use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A GPU model we watch, with the price we would be happy to pay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedModel {
    pub model: String,
    pub target_price: Decimal,
    pub retailers: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub models: Vec<TrackedModel>,
}

impl Catalog {
    pub fn gpus() -> Self {
        let retailers = || vec!["bestbuy".to_string(), "newegg".to_string(), "amazon".to_string()];

        Self {
            models: vec![
                TrackedModel {
                    model: "RTX 4090".to_string(),
                    target_price: dec!(1599),
                    retailers: retailers(),
                },
                TrackedModel {
                    model: "RTX 4080".to_string(),
                    target_price: dec!(1199),
                    retailers: retailers(),
                },
                TrackedModel {
                    model: "RTX 4070 Ti Super".to_string(),
                    target_price: dec!(799),
                    retailers: retailers(),
                },
            ],
        }
    }

    pub fn get(&self, model: &str) -> Option<&TrackedModel> {
        self.models.iter().find(|m| m.model == model)
    }
}
