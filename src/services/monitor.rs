use std::io::Write;

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::error::{MonitorError, MonitorResult};
use crate::models::{Alert, Catalog};
use crate::services::alert_engine::{self, AlertThresholds, ChangeKind};
use crate::services::price_source::PriceSource;
use crate::services::report::{self, ReportFormatter, TELEGRAM_MARKER};
use crate::services::state_store::StateStore;

/// Outcome of one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    pub alerts: Vec<Alert>,
}

/// Load state, compare, alert, save state.
pub struct Monitor {
    settings: Settings,
    store: StateStore,
    source: Box<dyn PriceSource>,
    formatter: ReportFormatter,
    catalog: Catalog,
}

impl Monitor {
    pub fn new(settings: Settings, source: Box<dyn PriceSource>) -> MonitorResult<Self> {
        Ok(Self {
            store: StateStore::new(settings.db_path.clone()),
            settings,
            source,
            formatter: ReportFormatter::new()?,
            catalog: Catalog::gpus(),
        })
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn thresholds(&self) -> AlertThresholds {
        AlertThresholds {
            alert_pct: self.settings.drop_pct,
            high_pct: self.settings.high_pct,
        }
    }

    pub fn run(&self, out: &mut impl Write) -> MonitorResult<RunSummary> {
        self.run_at(Utc::now(), out)
    }

    pub fn run_at(&self, now: DateTime<Utc>, out: &mut impl Write) -> MonitorResult<RunSummary> {
        let mut db = self.store.load();

        let current = self.source.fetch()?;
        tracing::info!(
            source = self.source.name(),
            models = current.len(),
            "fetched current prices"
        );

        for change in alert_engine::classify_changes(&current, &db) {
            match change.kind {
                ChangeKind::NewBaseline => {
                    tracing::info!(model = %change.model, retailer = %change.retailer, price = %change.price, "new baseline")
                }
                ChangeKind::Down(pct) => {
                    tracing::info!(model = %change.model, retailer = %change.retailer, price = %change.price, baseline = ?change.baseline, "down {pct}%")
                }
                ChangeKind::Up(pct) => {
                    tracing::info!(model = %change.model, retailer = %change.retailer, price = %change.price, baseline = ?change.baseline, "up {pct}%")
                }
                ChangeKind::Unchanged => {
                    tracing::debug!(model = %change.model, retailer = %change.retailer, price = %change.price, "unchanged")
                }
            }
        }

        let alerts = alert_engine::generate_alerts(&current, &db, now, &self.thresholds());

        db.last_update = Some(now);
        db.prices = current;

        if alerts.is_empty() {
            writeln!(out, "\n✅ No significant price drops (>={}%)", self.settings.drop_pct)
                .map_err(MonitorError::Output)?;

            let summary = self
                .formatter
                .format_summary(&report::lowest_prices(&db.prices), &self.catalog)?;
            writeln!(out, "\n{summary}").map_err(MonitorError::Output)?;
        } else {
            db.alerts.extend(alerts.iter().cloned());

            tracing::warn!(count = alerts.len(), "price drops detected");
            writeln!(out, "\n🚨 Found {} price drop(s)!", alerts.len()).map_err(MonitorError::Output)?;

            if let Some(message) = self.formatter.format_message(&alerts, now)? {
                writeln!(out, "\n📨 Alert report:\n{message}").map_err(MonitorError::Output)?;

                if self.settings.telegram_output() {
                    writeln!(out, "\n{TELEGRAM_MARKER}\n{message}").map_err(MonitorError::Output)?;
                }
            }
        }

        // also applies when the limit was lowered since the last alert
        let pruned = db.retain_recent_alerts(self.settings.alert_history_limit);
        if pruned > 0 {
            tracing::debug!(pruned, "pruned old alerts");
        }

        self.store.save(&db)?;

        Ok(RunSummary {
            checked: db.prices.len(),
            alerts,
        })
    }
}
