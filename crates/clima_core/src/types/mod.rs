//! Shared vocabulary and error types.
//!
//! This module provides:
//! - `temperature`: The `TemperatureKind` enum (monthly maxima vs minima)
//! - `error`: Structured error types for interpolation and kind parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`TemperatureKind`] from `temperature`
//! - [`InterpolationError`], [`KindError`] from `error`

pub mod error;
pub mod temperature;

// Re-export commonly used types at module level
pub use error::{InterpolationError, KindError};
pub use temperature::TemperatureKind;
