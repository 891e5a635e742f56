use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Alert, Snapshot};

/// Everything persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    #[serde(default)]
    pub last_update: Option<DateTime<Utc>>,

    #[serde(default)]
    pub prices: Snapshot,

    #[serde(default)]
    pub alerts: Vec<Alert>,
}

impl Database {
    /// Drops the oldest alerts so at most `limit` remain. `0` keeps everything.
    pub fn retain_recent_alerts(&mut self, limit: usize) -> usize {
        if limit == 0 || self.alerts.len() <= limit {
            return 0;
        }

        let excess = self.alerts.len() - limit;
        self.alerts.drain(..excess);
        excess
    }
}
