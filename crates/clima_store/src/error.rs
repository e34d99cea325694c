//! Temperature store error types.

use thiserror::Error;

/// Temperature store operation errors.
///
/// # Variants
///
/// - `Database`: Wrapped database driver error
/// - `Csv`: Wrapped CSV parse error
/// - `Io`: Wrapped filesystem error
/// - `InvalidRow`: A stored row that does not form a valid series
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database driver error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// CSV parse error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed stored row.
    #[error("Invalid row: {0}")]
    InvalidRow(String),
}
