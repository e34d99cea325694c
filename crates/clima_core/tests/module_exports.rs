//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths, and that the crate layers compose.

use approx::assert_relative_eq;
use chrono::Month;

/// Test that the interpolator module is accessible via absolute path.
#[test]
fn test_interpolator_module_exports() {
    use clima_core::math::interpolators::lagrange;
    use clima_core::math::interpolators::Interpolator;
    use clima_core::math::interpolators::LagrangeInterpolator;

    let xs = [1.0, 2.0, 3.0];
    let ys = [2.0, 3.0, 6.0];

    let y = lagrange(&xs, &ys, 2.5).unwrap();
    let interp = LagrangeInterpolator::new(&xs, &ys).unwrap();
    assert_eq!(y, interp.interpolate(2.5).unwrap());
    assert_eq!(interp.domain(), (1.0, 3.0));
}

/// Test that the trait seam accepts generic callers.
#[test]
fn test_interpolator_trait_generic_use() {
    use clima_core::math::interpolators::{Interpolator, LagrangeInterpolator};
    use clima_core::types::InterpolationError;

    fn midpoint_estimate<I: Interpolator<f64>>(interp: &I) -> Result<f64, InterpolationError> {
        let (lo, hi) = interp.domain();
        interp.interpolate((lo + hi) / 2.0)
    }

    let interp = LagrangeInterpolator::new(&[0.0, 2.0], &[1.0, 5.0]).unwrap();
    assert_relative_eq!(midpoint_estimate(&interp).unwrap(), 3.0, max_relative = 1e-12);
}

/// Test that series types are accessible via absolute path.
#[test]
fn test_series_module_exports() {
    use clima_core::series::error::SeriesError;
    use clima_core::series::monthly::MonthlySeries;

    let series = MonthlySeries::new([
        10.0, 12.0, 11.0, 15.0, 18.0, 22.0, 25.0, 26.0, 24.0, 20.0, 15.0, 11.0,
    ]);

    assert_eq!(series.value(Month::August), 26.0);
    assert_relative_eq!(
        series.estimate_at(6.5).unwrap(),
        23.724220275878906,
        max_relative = 1e-9
    );

    let err = MonthlySeries::from_slice(&[1.0]).unwrap_err();
    assert!(matches!(err, SeriesError::WrongLength { got: 1 }));
}

/// Test that vocabulary types are accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use clima_core::types::temperature::TemperatureKind;
    use clima_core::types::{InterpolationError, KindError};

    let kind: TemperatureKind = "max".parse().unwrap();
    assert_eq!(kind, TemperatureKind::Max);
    assert_eq!(kind.label(), "Maximum");

    let err: KindError = "median".parse::<TemperatureKind>().unwrap_err();
    assert!(matches!(err, KindError::UnknownKind(_)));

    let err = InterpolationError::InsufficientData { got: 0, need: 1 };
    assert!(format!("{}", err).contains("got 0"));
}

/// Test the full flow from stored readings to a rounded display estimate.
#[test]
fn test_series_to_estimate_flow() {
    use clima_core::series::MonthlySeries;

    let series = MonthlySeries::new([
        10.0, 12.0, 11.0, 15.0, 18.0, 22.0, 25.0, 26.0, 24.0, 20.0, 15.0, 11.0,
    ]);

    let estimate = series.estimate_at(6.5).unwrap();
    let display = (estimate * 100.0).round() / 100.0;
    assert_eq!(display, 23.72);
}
