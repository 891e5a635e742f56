use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "HIGH", alias = "🔥 HIGH")]
    High,
    #[serde(rename = "NORMAL", alias = "⚡ NORMAL")]
    Normal,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "🔥 HIGH",
            Severity::Normal => "⚡ NORMAL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub timestamp: DateTime<Utc>,
    pub model: String,
    pub retailer: String,

    pub old_price: Decimal,
    pub new_price: Decimal,

    // rounded to one decimal place
    pub drop_percent: Decimal,

    pub url: String,
    pub severity: Severity,
}
