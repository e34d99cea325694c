//! Monthly series error types.

use crate::types::InterpolationError;
use thiserror::Error;

/// Monthly series operation errors.
///
/// # Variants
///
/// - `WrongLength`: Series construction with other than twelve values
/// - `Interpolation`: Wrapped interpolation engine error
///
/// # Examples
///
/// ```
/// use clima_core::series::SeriesError;
///
/// let err = SeriesError::WrongLength { got: 5 };
/// assert_eq!(format!("{}", err), "Monthly series needs 12 values, got 5");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// Wrong number of monthly values.
    #[error("Monthly series needs 12 values, got {got}")]
    WrongLength {
        /// Number of values provided
        got: usize,
    },

    /// Interpolation error.
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),
}
