use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a monitoring pass.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Reading or writing the state file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the report to the output stream failed
    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Report template failed to render
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Report template failed to compile
    #[error("Template registration error: {0}")]
    TemplateRegistration(#[from] handlebars::TemplateError),

    /// The price source could not produce a snapshot
    #[error("Price source error: {0}")]
    PriceSource(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for monitor errors
pub type MonitorResult<T> = Result<T, MonitorError>;

impl MonitorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MonitorError::Io {
            path: path.into(),
            source,
        }
    }
}
