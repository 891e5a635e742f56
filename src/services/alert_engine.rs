use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Alert, Database, Severity, Snapshot};

/// Drop percentages at which an alert is raised and at which it becomes HIGH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertThresholds {
    pub alert_pct: Decimal,
    pub high_pct: Decimal,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            alert_pct: Decimal::from(5),
            high_pct: Decimal::from(10),
        }
    }
}

impl AlertThresholds {
    pub fn severity(&self, drop_pct: Decimal) -> Severity {
        if drop_pct >= self.high_pct {
            Severity::High
        } else {
            Severity::Normal
        }
    }
}

/// `(old - new) / old * 100`, unrounded. Negative when the price went up.
pub fn drop_percent(old_price: Decimal, new_price: Decimal) -> Option<Decimal> {
    if old_price.is_zero() {
        return None;
    }
    (old_price - new_price)
        .checked_div(old_price)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
}

pub fn round_percent(pct: Decimal) -> Decimal {
    pct.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Compares `current` against the previous run's prices.
///
/// Only the same model and the same retailer name are ever compared; a
/// retailer with no previous observation never triggers. The drop is rounded
/// to one decimal before either threshold is applied, so the stored
/// `drop_percent` always agrees with the severity next to it.
pub fn generate_alerts(
    current: &Snapshot,
    previous: &Database,
    now: DateTime<Utc>,
    thresholds: &AlertThresholds,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for (model, observations) in current {
        let Some(prev_obs) = previous.prices.get(model) else {
            continue;
        };

        for obs in observations {
            let Some(prev) = prev_obs.iter().find(|p| p.retailer == obs.retailer) else {
                continue;
            };

            if obs.price >= prev.price {
                continue;
            }

            let Some(pct) = drop_percent(prev.price, obs.price).map(round_percent) else {
                continue;
            };

            if pct < thresholds.alert_pct {
                continue;
            }

            alerts.push(Alert {
                timestamp: now,
                model: model.clone(),
                retailer: obs.retailer.clone(),
                old_price: prev.price,
                new_price: obs.price,
                drop_percent: pct,
                url: obs.url.clone(),
                severity: thresholds.severity(pct),
            });
        }
    }

    alerts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    NewBaseline,
    Up(Decimal),
    Down(Decimal),
    Unchanged,
}

/// How one retailer's price moved since the last run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceChange {
    pub model: String,
    pub retailer: String,
    pub price: Decimal,
    pub baseline: Option<Decimal>,
    pub kind: ChangeKind,
}

pub fn classify_changes(current: &Snapshot, previous: &Database) -> Vec<PriceChange> {
    let mut changes = Vec::new();

    for (model, observations) in current {
        let prev_obs = previous.prices.get(model);

        for obs in observations {
            let baseline = prev_obs
                .and_then(|list| list.iter().find(|p| p.retailer == obs.retailer))
                .map(|p| p.price);

            let kind = match baseline {
                None => ChangeKind::NewBaseline,
                Some(base) => match drop_percent(base, obs.price) {
                    Some(pct) if pct > Decimal::ZERO => ChangeKind::Down(round_percent(pct)),
                    Some(pct) if pct < Decimal::ZERO => ChangeKind::Up(round_percent(-pct)),
                    _ => ChangeKind::Unchanged,
                },
            };

            changes.push(PriceChange {
                model: model.clone(),
                retailer: obs.retailer.clone(),
                price: obs.price,
                baseline,
                kind,
            });
        }
    }

    changes
}
