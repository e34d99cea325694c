//! Classical Lagrange polynomial interpolation.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Validate a Lagrange sample set.
///
/// Checks, in order: matching array lengths, at least one sample point,
/// pairwise-distinct x-coordinates. Exact equality is the test for
/// duplicates because an exactly repeated x-coordinate is what zeroes a
/// basis denominator; nearly equal abscissae interpolate legitimately.
fn validate_samples<T: Float>(xs: &[T], ys: &[T]) -> Result<(), InterpolationError> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "xs and ys must have same length: got {} and {}",
            xs.len(),
            ys.len()
        )));
    }

    if xs.is_empty() {
        return Err(InterpolationError::InsufficientData { got: 0, need: 1 });
    }

    for i in 0..xs.len() {
        for j in (i + 1)..xs.len() {
            if xs[i] == xs[j] {
                return Err(InterpolationError::DuplicateAbscissa {
                    first: i,
                    second: j,
                    x: xs[i].to_f64().unwrap_or(f64::NAN),
                });
            }
        }
    }

    Ok(())
}

/// Evaluate the Lagrange form at `x` over validated samples.
///
/// For each index i the basis value is accumulated as a running product
/// over the remaining indices, then weighted by y_i and summed. O(n^2)
/// multiplications, no auxiliary storage. With a single sample the basis
/// product is empty, so the result is y_0.
fn eval_lagrange<T: Float>(xs: &[T], ys: &[T], x: T) -> T {
    let n = xs.len();
    let mut result = T::zero();

    for i in 0..n {
        let mut basis = T::one();
        for j in 0..n {
            if j != i {
                basis = basis * (x - xs[j]) / (xs[i] - xs[j]);
            }
        }
        result = result + ys[i] * basis;
    }

    result
}

/// One-shot Lagrange interpolation over a sample set.
///
/// Computes the value at `x` of the unique degree-(n-1) polynomial through
/// the n points `(xs[i], ys[i])`, without constructing polynomial
/// coefficients. Stateless: validation and evaluation happen in this call
/// and nothing is retained.
///
/// Queries outside the sampled x range extrapolate rather than fail;
/// accuracy away from the samples is the caller's concern.
///
/// # Arguments
///
/// * `xs` - Sample x-coordinates, pairwise distinct, in any order
/// * `ys` - Corresponding y-values
/// * `x` - The query point
///
/// # Returns
///
/// * `Ok(y)` - The interpolated (or extrapolated) value
/// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
/// * `Err(InterpolationError::InsufficientData)` - Empty sample set
/// * `Err(InterpolationError::DuplicateAbscissa)` - Repeated x-coordinate
///
/// # Example
///
/// ```
/// use clima_core::math::interpolators::lagrange;
///
/// // Three points on y = x^2
/// let xs = [1.0, 2.0, 3.0];
/// let ys = [1.0, 4.0, 9.0];
///
/// let y: f64 = lagrange(&xs, &ys, 2.5).unwrap();
/// assert!((y - 6.25).abs() < 1e-12);
/// ```
pub fn lagrange<T: Float>(xs: &[T], ys: &[T], x: T) -> Result<T, InterpolationError> {
    validate_samples(xs, ys)?;
    Ok(eval_lagrange(xs, ys, x))
}

/// Lagrange polynomial interpolator.
///
/// Stores a validated sample set and evaluates the unique degree-(n-1)
/// polynomial through it at arbitrary query points. Supports any sample
/// count n >= 1; the single-sample case is the constant polynomial.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Sample points are kept in the order given; sortedness is not required
/// and reordering the samples does not change any estimate. All x-values
/// must be pairwise distinct, which is checked at construction.
///
/// # Example
///
/// ```
/// use clima_core::math::interpolators::{Interpolator, LagrangeInterpolator};
///
/// let xs = [1.0, 2.0, 3.0, 4.0];
/// let ys = [10.0, 12.0, 11.0, 15.0];
///
/// let interp = LagrangeInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (1.0, 4.0));
/// ```
#[derive(Debug, Clone)]
pub struct LagrangeInterpolator<T: Float> {
    /// Sample x-coordinates, in caller order
    xs: Vec<T>,
    /// Corresponding y-values
    ys: Vec<T>,
}

impl<T: Float> LagrangeInterpolator<T> {
    /// Construct a Lagrange interpolator from x and y data points.
    ///
    /// Requires at least 1 data point and pairwise-distinct x-coordinates.
    /// The sample order is preserved as given.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of x-coordinates
    /// * `ys` - Slice of corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(LagrangeInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    /// * `Err(InterpolationError::InsufficientData)` - Empty sample set
    /// * `Err(InterpolationError::DuplicateAbscissa)` - Repeated x-coordinate
    ///
    /// # Example
    ///
    /// ```
    /// use clima_core::math::interpolators::LagrangeInterpolator;
    ///
    /// // Valid construction, a single point is enough
    /// let interp = LagrangeInterpolator::new(&[5.0], &[42.0]).unwrap();
    ///
    /// // Duplicate x-coordinates are rejected
    /// let result = LagrangeInterpolator::new(&[1.0, 1.0], &[2.0, 3.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        validate_samples(xs, ys)?;

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Returns a reference to the x-coordinates, in construction order.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values, in construction order.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    /// Note: This should never be true for a valid interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for LagrangeInterpolator<T> {
    /// Interpolate the value at point `x` using the Lagrange form.
    ///
    /// # Formula
    ///
    /// ```text
    /// L_i(x) = Π over j ≠ i of (x - x_j) / (x_i - x_j)
    /// y      = Σ over i of y_i · L_i(x)
    /// ```
    ///
    /// When `x` equals a sample x-coordinate x_k, every factor of L_k is
    /// exactly 1 and every other basis contains an exactly zero factor, so
    /// the sum collapses to y_k with no rounding.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to interpolate; points outside `domain()`
    ///   extrapolate
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - Always, for a constructed interpolator: the polynomial
    ///   is defined on the whole real line and the sample set was validated
    ///   by [`LagrangeInterpolator::new`]
    ///
    /// # Example
    ///
    /// ```
    /// use clima_core::math::interpolators::{Interpolator, LagrangeInterpolator};
    ///
    /// let interp = LagrangeInterpolator::new(&[1.0, 2.0, 3.0], &[1.0, 4.0, 9.0]).unwrap();
    ///
    /// // Interpolate between samples
    /// let y: f64 = interp.interpolate(2.5).unwrap();
    /// assert!((y - 6.25).abs() < 1e-12);
    ///
    /// // Interpolate at a sample point
    /// let y = interp.interpolate(2.0).unwrap();
    /// assert_eq!(y, 4.0);
    /// ```
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        Ok(eval_lagrange(&self.xs, &self.ys, x))
    }

    /// Return the sampled x range.
    ///
    /// Samples are stored unsorted, so the bounds are found by scanning.
    /// For a single sample both bounds equal its x-coordinate. The range
    /// is informational: queries outside it are still evaluated.
    ///
    /// # Returns
    ///
    /// A tuple `(x_min, x_max)` spanning the sample x-coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use clima_core::math::interpolators::{Interpolator, LagrangeInterpolator};
    ///
    /// let interp = LagrangeInterpolator::new(&[3.0, 1.0, 2.0], &[9.0, 1.0, 4.0]).unwrap();
    /// assert_eq!(interp.domain(), (1.0, 3.0));
    /// ```
    fn domain(&self) -> (T, T) {
        let mut min = self.xs[0];
        let mut max = self.xs[0];
        for &x in &self.xs[1..] {
            if x < min {
                min = x;
            }
            if x > max {
                max = x;
            }
        }
        (min, max)
    }
}
