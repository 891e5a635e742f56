//! Library entrypoint for gpu-price-watch.
//!
//! The binary is a thin wrapper; everything lives here so the
//! integration tests under `tests/` can drive a full pass.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod templates;

pub use error::{MonitorError, MonitorResult};
pub use services::monitor::{Monitor, RunSummary};
