pub mod alert_engine;
pub mod monitor;
pub mod price_source;
pub mod report;
pub mod state_store;
