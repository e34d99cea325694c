//! Numerical routines for the temperature engine.
//!
//! This module provides:
//! - `interpolators`: Polynomial interpolation over scattered sample points

pub mod interpolators;
