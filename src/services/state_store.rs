use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{MonitorError, MonitorResult};
use crate::models::Database;

/// JSON file holding the last snapshot and the alert log.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Never fails: a missing, unreadable or corrupt file yields an empty database.
    pub fn load(&self) -> Database {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no state file yet, starting fresh");
                return Database::default();
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to read state file");
                return Database::default();
            }
        };

        match serde_json::from_str::<Database>(&raw) {
            Ok(db) => {
                tracing::debug!(
                    models = db.prices.len(),
                    alerts = db.alerts.len(),
                    "loaded state"
                );
                db
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "state file is corrupt, resetting");
                Database::default()
            }
        }
    }

    /// Writes a sibling temp file and renames it over the target.
    pub fn save(&self, db: &Database) -> MonitorResult<()> {
        let body = serde_json::to_string_pretty(db)?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| MonitorError::io(dir, e))?;
        }

        let tmp = self.tmp_path();
        {
            let mut file = fs::File::create(&tmp).map_err(|e| MonitorError::io(&tmp, e))?;
            file.write_all(body.as_bytes())
                .and_then(|_| file.sync_all())
                .map_err(|e| MonitorError::io(&tmp, e))?;
        }

        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(MonitorError::io(&self.path, e));
        }

        tracing::debug!(path = %self.path.display(), alerts = db.alerts.len(), "saved state");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "price_db.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
