pub mod alert;
pub mod catalog;
pub mod database;
pub mod price;

pub use alert::{Alert, Severity};
pub use catalog::{Catalog, TrackedModel};
pub use database::Database;
pub use price::{PriceObservation, Snapshot};
