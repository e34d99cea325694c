//! Monthly temperature series types.
//!
//! This module provides:
//! - `monthly`: The `MonthlySeries` twelve-value series with estimation
//! - `error`: Structured error types for series operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`MonthlySeries`] from `monthly`
//! - [`SeriesError`] from `error`

pub mod error;
pub mod monthly;

// Re-export commonly used types at module level
pub use error::SeriesError;
pub use monthly::MonthlySeries;
