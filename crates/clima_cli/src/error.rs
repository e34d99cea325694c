//! CLI error types

use clima_core::series::SeriesError;
use clima_core::types::TemperatureKind;
use clima_store::error::StoreError;
use thiserror::Error;

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag value was rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A named input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The data set has no row for the requested pair
    #[error("No data for city {city} with kind {kind}")]
    CityNotFound {
        /// Requested city name
        city: String,
        /// Requested temperature kind
        kind: TemperatureKind,
    },

    /// Data loading failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Estimation failure
    #[error("Estimation error: {0}")]
    Series(#[from] SeriesError),

    /// Output serialisation failure
    #[error("Serialisation error: {0}")]
    Json(#[from] serde_json::Error),
}
