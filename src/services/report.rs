use chrono::{DateTime, Local, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use serde_json::json;

use crate::error::MonitorResult;
use crate::models::{Alert, Catalog, PriceObservation, Snapshot};
use crate::templates::{self, Hbs};

pub const TELEGRAM_MARKER: &str = "---TELEGRAM_MESSAGE---";

#[derive(Debug, Clone, Serialize)]
struct AlertView {
    severity: &'static str,
    model: String,
    retailer: String,
    old_price: String,
    new_price: String,
    drop_percent: String,
    url: String,
}

impl From<&Alert> for AlertView {
    fn from(a: &Alert) -> Self {
        Self {
            severity: a.severity.label(),
            model: a.model.clone(),
            retailer: a.retailer.clone(),
            old_price: a.old_price.to_string(),
            new_price: a.new_price.to_string(),
            drop_percent: a.drop_percent.to_string(),
            url: a.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct SummaryLineView {
    model: String,
    price: String,
    retailer: String,
    vs_target: Option<String>,
}

/// Cheapest observation for one model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowestPrice {
    pub model: String,
    pub observation: PriceObservation,
}

/// Per model, the cheapest observation. Equal prices keep the first one seen.
pub fn lowest_prices(snapshot: &Snapshot) -> Vec<LowestPrice> {
    snapshot
        .iter()
        .filter_map(|(model, observations)| {
            let lowest = observations
                .iter()
                .reduce(|min, o| if o.price < min.price { o } else { min })?;

            Some(LowestPrice {
                model: model.clone(),
                observation: lowest.clone(),
            })
        })
        .collect()
}

fn vs_target(price: Decimal, target: Decimal) -> Option<String> {
    if target.is_zero() {
        return None;
    }

    let pct = ((target - price) / target * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    let text = if pct > Decimal::ZERO {
        format!("{pct}% below target ${target}")
    } else if pct < Decimal::ZERO {
        format!("{}% above target ${target}", pct.abs())
    } else {
        format!("at target ${target}")
    };
    Some(text)
}

/// Renders alert reports and the no-alert summary.
#[derive(Clone)]
pub struct ReportFormatter {
    hbs: Hbs,
}

impl ReportFormatter {
    pub fn new() -> MonitorResult<Self> {
        Ok(Self {
            hbs: templates::build_handlebars()?,
        })
    }

    /// `None` when there is nothing to report.
    pub fn format_message(
        &self,
        alerts: &[Alert],
        now: DateTime<Utc>,
    ) -> MonitorResult<Option<String>> {
        if alerts.is_empty() {
            return Ok(None);
        }

        let views: Vec<AlertView> = alerts.iter().map(AlertView::from).collect();
        let ctx = json!({
            "alerts": views,
            "generated_at": local_timestamp(now),
        });

        let out = self.hbs.render(templates::REPORT, &ctx)?;
        Ok(Some(out.trim_end().to_string()))
    }

    pub fn format_summary(&self, lowest: &[LowestPrice], catalog: &Catalog) -> MonitorResult<String> {
        let lines: Vec<SummaryLineView> = lowest
            .iter()
            .map(|l| SummaryLineView {
                model: l.model.clone(),
                price: l.observation.price.to_string(),
                retailer: l.observation.retailer.clone(),
                vs_target: catalog
                    .get(&l.model)
                    .and_then(|m| vs_target(l.observation.price, m.target_price)),
            })
            .collect();

        let out = self.hbs.render(templates::SUMMARY, &json!({ "lines": lines }))?;
        Ok(out.trim_end().to_string())
    }
}

pub fn local_timestamp(now: DateTime<Utc>) -> String {
    now.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S %:z")
        .to_string()
}
