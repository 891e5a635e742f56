use std::env;
use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::error::{MonitorError, MonitorResult};

pub const TELEGRAM_OUTPUT_MODE: &str = "telegram";

#[derive(Debug, Clone)]
pub struct Settings {
    pub db_path: PathBuf,
    pub output_mode: Option<String>,

    pub drop_pct: Decimal,
    pub high_pct: Decimal,

    // 0 keeps the full alert history
    pub alert_history_limit: usize,
}

impl Settings {
    pub fn telegram_output(&self) -> bool {
        self.output_mode.as_deref() == Some(TELEGRAM_OUTPUT_MODE)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("price_db.json"),
            output_mode: None,
            drop_pct: Decimal::from(5),
            high_pct: Decimal::from(10),
            alert_history_limit: 1000,
        }
    }
}

pub fn load() -> MonitorResult<Settings> {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    from_lookup(|key| env::var(key).ok())
}

/// Builds settings from any key lookup; unparsable numbers fall back to defaults.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> MonitorResult<Settings> {
    let defaults = Settings::default();

    let db_path = lookup("PRICE_DB_PATH")
        .map(PathBuf::from)
        .unwrap_or(defaults.db_path);

    let output_mode = lookup("OUTPUT_MODE");

    let drop_pct = lookup("ALERT_DROP_PCT")
        .and_then(|s| s.trim().parse::<Decimal>().ok())
        .unwrap_or(defaults.drop_pct);

    let high_pct = lookup("ALERT_HIGH_PCT")
        .and_then(|s| s.trim().parse::<Decimal>().ok())
        .unwrap_or(defaults.high_pct);

    let alert_history_limit = lookup("ALERT_HISTORY_LIMIT")
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(defaults.alert_history_limit);

    if drop_pct <= Decimal::ZERO {
        return Err(MonitorError::Config(
            "ALERT_DROP_PCT must be greater than 0".to_string(),
        ));
    }

    if high_pct < drop_pct {
        return Err(MonitorError::Config(format!(
            "ALERT_HIGH_PCT ({high_pct}) must not be lower than ALERT_DROP_PCT ({drop_pct})"
        )));
    }

    Ok(Settings {
        db_path,
        output_mode,
        drop_pct,
        high_pct,
        alert_history_limit,
    })
}
