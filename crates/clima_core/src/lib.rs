//! # clima_core: Interpolation Engine for Monthly Temperature Series
//!
//! ## Layer 1 (Engine) Role
//!
//! clima_core is the bottom layer of the workspace, providing:
//! - The Lagrange interpolation engine (`math::interpolators`)
//! - Monthly series domain types (`series`)
//! - Temperature kind vocabulary: `TemperatureKind` (`types::temperature`)
//! - Error types: `InterpolationError`, `SeriesError`, `KindError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other clima_* crates, with minimal external
//! dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Month vocabulary
//! - serde: Serialisation support
//!
//! The engine itself performs no I/O, no logging, and holds no global state.
//! Callers own data access, query-parameter policy, and presentation.
//!
//! ## Usage Examples
//!
//! ```rust
//! use clima_core::math::interpolators::{Interpolator, LagrangeInterpolator};
//! use clima_core::series::MonthlySeries;
//!
//! // One-off evaluation through the engine
//! let xs = [1.0, 2.0, 3.0];
//! let ys = [10.0, 14.0, 12.0];
//! let interp = LagrangeInterpolator::new(&xs, &ys).unwrap();
//! let y: f64 = interp.interpolate(2.5).unwrap();
//! assert!((y - 13.75).abs() < 1e-12);
//!
//! // Monthly series with the fixed 1..=12 month axis
//! let series = MonthlySeries::new([
//!     26.0, 26.5, 27.0, 27.5, 28.0, 28.5,
//!     28.5, 28.5, 28.0, 27.5, 27.0, 26.5,
//! ]);
//! let june = series.estimate_at(6.0).unwrap();
//! assert!((june - 28.5).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod series;
pub mod types;
