//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolation engine validation
//! - `KindError`: Errors from temperature kind parsing

use thiserror::Error;

/// Interpolation-related errors.
///
/// Provides structured error handling for sample-set validation with
/// descriptive context for each failure mode. All validation happens
/// before any arithmetic: a malformed sample set is rejected with one
/// of these variants, never surfaced as a division by zero or a NaN.
///
/// # Variants
/// - `InsufficientData`: Not enough sample points for interpolation
/// - `DuplicateAbscissa`: Two sample points share an x-coordinate
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use clima_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 0, need: 1 };
/// assert_eq!(
///     format!("{}", err),
///     "Insufficient sample points: got 0, need at least 1"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Insufficient sample points for interpolation.
    #[error("Insufficient sample points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Two sample points share the same x-coordinate.
    ///
    /// Equal abscissae make a Lagrange basis denominator vanish, so the
    /// sample set is rejected at construction.
    #[error("Duplicate x-coordinate {x} at indices {first} and {second}")]
    DuplicateAbscissa {
        /// Index of the earlier point with this x-coordinate
        first: usize,
        /// Index of the later point with this x-coordinate
        second: usize,
        /// The shared x-coordinate
        x: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Temperature kind parsing errors.
///
/// # Examples
/// ```
/// use clima_core::types::KindError;
///
/// let err = KindError::UnknownKind("avg".to_string());
/// assert_eq!(format!("{}", err), "Unknown temperature kind: avg");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KindError {
    /// Unknown temperature kind string.
    #[error("Unknown temperature kind: {0}")]
    UnknownKind(String),
}
