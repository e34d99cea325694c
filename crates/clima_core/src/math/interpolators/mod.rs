//! Interpolation methods for numerical computation.
//!
//! This module provides the polynomial interpolation engine used to estimate
//! temperatures at fractional months, generic over `T: Float` so the same
//! code serves `f64` and `f32` callers.
//!
//! ## Available Interpolators
//!
//! - [`LagrangeInterpolator`]: Classical Lagrange polynomial interpolation
//! - [`lagrange`]: One-shot evaluation without constructing an interpolator
//!
//! ## Core Trait
//!
//! Interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return the sampled x range
//!
//! ## Extrapolation
//!
//! The Lagrange polynomial is defined on the whole real line, so queries
//! outside `domain()` are evaluated rather than rejected. Callers that want
//! a bounded query range enforce it themselves.
//!
//! ## Example
//!
//! ```
//! use clima_core::math::interpolators::{Interpolator, LagrangeInterpolator};
//!
//! let xs = [1.0, 2.0, 3.0, 4.0];
//! let ys = [1.0, 4.0, 9.0, 16.0];
//!
//! let interp = LagrangeInterpolator::new(&xs, &ys).unwrap();
//! let (x_min, x_max) = interp.domain();
//! assert_eq!(x_min, 1.0);
//! assert_eq!(x_max, 4.0);
//!
//! // The four samples lie on y = x^2, and four points determine
//! // a unique cubic, so the quadratic is reproduced exactly
//! let y: f64 = interp.interpolate(2.5).unwrap();
//! assert!((y - 6.25).abs() < 1e-10);
//! ```

mod lagrange;
mod traits;

// Re-export public types at module level
pub use lagrange::{lagrange, LagrangeInterpolator};
pub use traits::Interpolator;
