//! Core interpolation trait.

use crate::types::InterpolationError;
use num_traits::Float;

/// Common interface for 1D interpolators.
///
/// Implementors own a validated sample set and evaluate it at arbitrary
/// query points. The `Result` return lets implementations with restricted
/// domains reject queries; implementations defined on the whole real line
/// always return `Ok`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use clima_core::math::interpolators::{Interpolator, LagrangeInterpolator};
///
/// fn estimate<I: Interpolator<f64>>(interp: &I, x: f64) -> f64 {
///     interp.interpolate(x).unwrap()
/// }
///
/// let interp = LagrangeInterpolator::new(&[0.0, 1.0], &[3.0, 5.0]).unwrap();
/// assert!((estimate(&interp, 0.5) - 4.0).abs() < 1e-12);
/// ```
pub trait Interpolator<T: Float> {
    /// Interpolate the value at point `x`.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to interpolate
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated value
    /// * `Err(InterpolationError)` - If the implementation rejects the query
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the sampled x range as `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
