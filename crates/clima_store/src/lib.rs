//! # Clima Store
//!
//! Storage layer for monthly city temperature series.
//!
//! Every backend exposes the same [`TemperatureStore`] trait, so the server
//! and CLI stay agnostic about where readings come from. A lookup miss is
//! `Ok(None)`, never an error; errors are reserved for backend failures.
//!
//! ## Modules
//!
//! - [`memory`]: In-memory store, seeded sample data for demo mode
//! - [`postgres`]: PostgreSQL store over the `city_temperatures` table
//! - [`csv_source`]: CSV data file reader feeding the in-memory store
//! - [`error`]: Storage error types

pub mod csv_source;
pub mod error;
pub mod memory;
pub mod postgres;

use clima_core::series::MonthlySeries;
use clima_core::types::TemperatureKind;

use crate::error::StoreError;

/// Read access to stored temperature series.
#[async_trait::async_trait]
pub trait TemperatureStore: Send + Sync {
    /// Distinct city names, sorted ascending.
    async fn list_cities(&self) -> Result<Vec<String>, StoreError>;

    /// The series for one `(city, kind)` pair, or `None` when absent.
    async fn monthly_series(
        &self,
        city: &str,
        kind: TemperatureKind,
    ) -> Result<Option<MonthlySeries>, StoreError>;

    /// Short backend label for logs and health reporting.
    fn backend_name(&self) -> &'static str;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::csv_source::{read_records, TemperatureRecord};
    pub use crate::error::StoreError;
    pub use crate::memory::MemoryStore;
    pub use crate::postgres::PgTemperatureStore;
    pub use crate::TemperatureStore;
}
